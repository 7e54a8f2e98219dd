//! Bounded FIFO queue of deferred effects.
//!
//! Attack effects that must not fire in the instant of the hit (knockback)
//! enqueue a task here; the tick coordinator drains exactly one task per
//! simulation step per side, so a burst of hits cannot release a burst of
//! shoves in the same instant.

use arrayvec::ArrayVec;

use crate::actor::WorldAccess;
use crate::config::MorphConfig;

/// A deferred effect. Receives world access at execution time so it can
/// re-find its target by id; the task itself carries no call arguments.
pub type DeferredTask = Box<dyn FnOnce(&mut dyn WorldAccess) + Send>;

/// FIFO queue with a fixed capacity; overflow drops the new task.
#[derive(Default)]
pub struct DeferredTaskQueue {
    tasks: ArrayVec<DeferredTask, { MorphConfig::MAX_DEFERRED_TASKS }>,
}

impl DeferredTaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a task, dropping it with a warning if the queue is full.
    pub fn push(&mut self, task: DeferredTask) {
        if self.tasks.try_push(task).is_err() {
            tracing::warn!(
                target: "morph::tasks",
                limit = MorphConfig::MAX_DEFERRED_TASKS,
                "deferred task queue full, dropping task"
            );
        }
    }

    /// Removes and returns the oldest pending task.
    pub fn pop_front(&mut self) -> Option<DeferredTask> {
        if self.tasks.is_empty() {
            None
        } else {
            Some(self.tasks.remove(0))
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl std::fmt::Debug for DeferredTaskQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredTaskQueue")
            .field("pending", &self.tasks.len())
            .finish()
    }
}

/// Enqueue-only view handed to attack effects.
pub struct TaskSink<'a> {
    queue: &'a mut DeferredTaskQueue,
}

impl<'a> TaskSink<'a> {
    pub fn new(queue: &'a mut DeferredTaskQueue) -> Self {
        Self { queue }
    }

    pub fn push(&mut self, task: DeferredTask) {
        self.queue.push(task);
    }
}
