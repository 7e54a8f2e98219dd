//! Keyed store of per-actor capabilities.

use std::collections::HashMap;

use morph_core::{ActorId, Capability, MorphRegistry, SavedCapability};

/// Owns every actor's [`Capability`], keyed by actor id.
///
/// The host calls [`CapabilityStore::attach`] when an actor enters the
/// simulation (or lazily on first use) and [`CapabilityStore::detach`]
/// when the actor is removed; everything in between goes through the
/// accessors.
#[derive(Debug, Default)]
pub struct CapabilityStore {
    capabilities: HashMap<ActorId, Capability>,
}

impl CapabilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the actor's capability, creating a fresh one on first use.
    pub fn attach(&mut self, id: ActorId) -> &mut Capability {
        self.capabilities.entry(id).or_default()
    }

    /// Restores an actor's capability from persisted state.
    pub fn attach_saved(
        &mut self,
        id: ActorId,
        saved: &SavedCapability,
        registry: &MorphRegistry,
    ) -> &mut Capability {
        self.capabilities
            .insert(id, Capability::from_saved(saved, registry));
        self.capabilities.get_mut(&id).expect("just inserted")
    }

    pub fn get(&self, id: ActorId) -> Option<&Capability> {
        self.capabilities.get(&id)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Capability> {
        self.capabilities.get_mut(&id)
    }

    pub fn is_attached(&self, id: ActorId) -> bool {
        self.capabilities.contains_key(&id)
    }

    /// Removes and returns the actor's capability (actor-removal hook).
    /// The host typically persists [`Capability::to_saved`] first.
    pub fn detach(&mut self, id: ActorId) -> Option<Capability> {
        self.capabilities.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_is_create_on_first_use() {
        let mut store = CapabilityStore::new();
        assert!(!store.is_attached(ActorId(7)));

        store.attach(ActorId(7)).acquire("wolf");
        assert!(store.is_attached(ActorId(7)));

        // a second attach returns the same capability, not a fresh one
        assert!(store.attach(ActorId(7)).has_acquired("wolf"));
    }

    #[test]
    fn detach_removes_the_capability() {
        let mut store = CapabilityStore::new();
        store.attach(ActorId(7)).acquire("wolf");

        let detached = store.detach(ActorId(7)).unwrap();
        assert!(detached.has_acquired("wolf"));
        assert!(!store.is_attached(ActorId(7)));
    }
}
