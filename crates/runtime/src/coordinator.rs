//! Per-step actor update driver.
//!
//! The coordinator owns the two per-side deferred-task queues and runs the
//! per-actor, per-step morph update: drain one deferred task, record the
//! health ratio, restore the viewpoint when demorphed, and drive the
//! current morph's abilities with fault isolation: a failing update costs
//! the actor its morph, never the step.

use morph_core::{
    ActorId, DeferredTask, DeferredTaskQueue, MorphConfig, MorphRegistry, TaskSink, WorldAccess,
};

use crate::store::CapabilityStore;

/// Which half of the simulation a step belongs to.
///
/// The two sides run their own step loops and must not share task
/// ordering, so each gets an independent queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Side {
    /// The side whose state is canonical; forced recovery happens here.
    Authoritative,
    /// Presentation-only mirror; it renders what it is told.
    Presentation,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Side::Authoritative => 0,
            Side::Presentation => 1,
        }
    }
}

/// Phase of one simulation step. Morph processing runs after the step has
/// begun so per-step setup elsewhere (attribute rebuilds, scheduling) has
/// already happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickPhase {
    Start,
    End,
}

/// Owns per-side deferred-task queues and drives per-actor updates.
///
/// Constructed by the host at startup and dropped with it; never a
/// process-wide global.
pub struct TickCoordinator {
    config: MorphConfig,
    queues: [DeferredTaskQueue; 2],
}

impl TickCoordinator {
    pub fn new(config: MorphConfig) -> Self {
        Self {
            config,
            queues: [DeferredTaskQueue::new(), DeferredTaskQueue::new()],
        }
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    /// Queues a deferred effect on one side's queue.
    pub fn push_deferred(&mut self, side: Side, task: DeferredTask) {
        self.queues[side.index()].push(task);
    }

    /// Number of tasks pending on one side's queue.
    pub fn pending(&self, side: Side) -> usize {
        self.queues[side.index()].len()
    }

    /// Enqueue-only view of one side's queue, for attack dispatch.
    pub fn task_sink(&mut self, side: Side) -> TaskSink<'_> {
        TaskSink::new(&mut self.queues[side.index()])
    }

    /// Runs one actor's per-step morph processing.
    ///
    /// At most one deferred task runs per call; combined with the host
    /// calling this once per actor per step, that throttles delayed
    /// effects to one per side per step.
    pub fn tick_actor(
        &mut self,
        side: Side,
        phase: TickPhase,
        actor_id: ActorId,
        world: &mut dyn WorldAccess,
        store: &mut CapabilityStore,
        registry: &MorphRegistry,
    ) {
        if phase == TickPhase::Start {
            return;
        }

        if let Some(task) = self.queues[side.index()].pop_front() {
            task(world);
        }

        let Some(actor) = world.actor_mut(actor_id) else {
            return;
        };

        let Some(capability) = store.get_mut(actor_id) else {
            if !self.config.disable_pov {
                actor.set_eye_height(actor.default_eye_height());
            }
            return;
        };

        // Max health can be mid-rebuild by other systems during a step;
        // only store the ratio while it reads as meaningful.
        let max_health = actor.max_health();
        if max_health > MorphConfig::REASONABLE_MAX_HEALTH {
            capability.set_last_health_ratio(actor.health() / max_health);
        }

        if !capability.is_morphed() {
            if !self.config.disable_pov {
                actor.set_eye_height(actor.default_eye_height());
            }
            return;
        }

        let failure = match capability.current_mut() {
            Some(morph) => match morph.update(actor, registry) {
                Ok(()) => None,
                Err(error) => Some((morph.name().to_owned(), error)),
            },
            None => None,
        };

        if let Some((morph_name, error)) = failure {
            tracing::error!(
                target: "morph::tick",
                actor = %actor_id,
                morph = %morph_name,
                %side,
                error = %error,
                "morph update failed"
            );
            // Only the canonical side recovers by force; the presentation
            // side waits to be told the new state.
            if side == Side::Authoritative {
                capability.clear_current();
            }
        }
    }
}

impl std::fmt::Debug for TickCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickCoordinator")
            .field("config", &self.config)
            .field("authoritative_pending", &self.queues[0].len())
            .field("presentation_pending", &self.queues[1].len())
            .finish()
    }
}
