//! Process-wide morph registry.
//!
//! Maps morph names to their settings and ability/action/attack names to
//! their plugin implementations. Built once at startup (default plugin
//! registrations, then layered settings sources) and read-mostly
//! afterwards: a config reload constructs a fresh registry and replaces
//! this one wholesale, so lookups never observe a half-merged state.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::abilities::{Ability, AttackEffect, MorphAction};
use crate::error::MorphError;
use crate::morph::{Morph, SavedMorph};
use crate::settings::MorphSettings;

#[derive(Default)]
pub struct MorphRegistry {
    settings: HashMap<String, Arc<MorphSettings>>,
    abilities: HashMap<String, Arc<dyn Ability>>,
    actions: HashMap<String, Arc<dyn MorphAction>>,
    attacks: HashMap<String, Arc<dyn AttackEffect>>,
    blacklist: HashSet<String>,
}

impl MorphRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== plugin registration (startup, before settings load) =====

    /// Registers an ability implementation; last registration wins.
    pub fn register_ability(&mut self, name: &str, ability: Arc<dyn Ability>) {
        if self.abilities.insert(name.to_owned(), ability).is_some() {
            warn_replaced("ability", name);
        }
    }

    /// Registers an action implementation; last registration wins.
    pub fn register_action(&mut self, name: &str, action: Arc<dyn MorphAction>) {
        if self.actions.insert(name.to_owned(), action).is_some() {
            warn_replaced("action", name);
        }
    }

    /// Registers an attack effect; last registration wins.
    pub fn register_attack(&mut self, name: &str, attack: Arc<dyn AttackEffect>) {
        if self.attacks.insert(name.to_owned(), attack).is_some() {
            warn_replaced("attack", name);
        }
    }

    // ===== settings =====

    /// Applies one parsed settings source: each entry merges into the
    /// existing entry of the same name, or inserts fresh.
    ///
    /// Callers hand this already-validated entries; a source that failed to
    /// parse as a whole never reaches the registry.
    pub fn apply_settings(&mut self, entries: impl IntoIterator<Item = MorphSettings>) {
        for entry in entries {
            match self.settings.get_mut(&entry.name) {
                Some(existing) => Arc::make_mut(existing).merge(&entry),
                None => {
                    self.settings.insert(entry.name.clone(), Arc::new(entry));
                }
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Arc<MorphSettings>> {
        self.settings.get(name)
    }

    pub fn settings_names(&self) -> impl Iterator<Item = &str> {
        self.settings.keys().map(String::as_str)
    }

    // ===== plugin resolution =====

    pub fn resolve_ability(&self, name: &str) -> Option<Arc<dyn Ability>> {
        self.abilities.get(name).cloned()
    }

    pub fn resolve_action(&self, name: &str) -> Option<Arc<dyn MorphAction>> {
        self.actions.get(name).cloned()
    }

    pub fn resolve_attack(&self, name: &str) -> Option<Arc<dyn AttackEffect>> {
        self.attacks.get(name).cloned()
    }

    // ===== blacklist =====

    pub fn blacklist_insert(&mut self, name: impl Into<String>) {
        self.blacklist.insert(name.into());
    }

    pub fn is_blacklisted(&self, name: &str) -> bool {
        self.blacklist.contains(name)
    }

    // ===== morph construction =====

    /// Builds a morph from a registered kind plus optional captured
    /// per-individual attributes.
    pub fn morph(
        &self,
        name: &str,
        instance: Option<serde_json::Value>,
    ) -> Result<Morph, MorphError> {
        let settings = self
            .settings
            .get(name)
            .ok_or_else(|| MorphError::unknown_identity(name))?;
        Ok(Morph::new(Arc::clone(settings), instance))
    }

    /// Reconstructs a previously-owned morph from persisted data.
    pub fn morph_from_saved(&self, saved: &SavedMorph) -> Result<Morph, MorphError> {
        self.morph(&saved.name, saved.instance.clone())
    }
}

impl std::fmt::Debug for MorphRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphRegistry")
            .field("settings", &self.settings.len())
            .field("abilities", &self.abilities.len())
            .field("actions", &self.actions.len())
            .field("attacks", &self.attacks.len())
            .field("blacklist", &self.blacklist.len())
            .finish()
    }
}

fn warn_replaced(kind: &str, name: &str) {
    tracing::warn!(
        target: "morph::registry",
        kind,
        name,
        "re-registration replaced an existing plugin, last registration wins"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Actor;
    use crate::morph::FlightState;
    use crate::settings::PluginRef;

    struct NoopAbility;

    impl Ability for NoopAbility {
        fn update(&self, _actor: &mut dyn Actor, _slot: &PluginRef, _flight: &mut FlightState) {}
    }

    fn settings_with_ability(name: &str, ability: &str) -> MorphSettings {
        let mut s = MorphSettings::new(name);
        s.abilities.push(PluginRef::named(ability));
        s
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = MorphRegistry::new();
        let first: Arc<dyn Ability> = Arc::new(NoopAbility);
        let second: Arc<dyn Ability> = Arc::new(NoopAbility);

        registry.register_ability("swim", first);
        registry.register_ability("swim", Arc::clone(&second));

        let resolved = registry.resolve_ability("swim").unwrap();
        assert!(Arc::ptr_eq(&resolved, &second));
    }

    #[test]
    fn apply_settings_merges_same_name_across_sources() {
        let mut registry = MorphRegistry::new();
        registry.apply_settings([settings_with_ability("wolf", "swim")]);
        registry.apply_settings([settings_with_ability("wolf", "jumping")]);

        let wolf = registry.lookup("wolf").unwrap();
        let names: Vec<&str> = wolf.abilities.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["swim", "jumping"]);
    }

    #[test]
    fn shared_settings_stay_shared_across_morphs() {
        let mut registry = MorphRegistry::new();
        registry.apply_settings([settings_with_ability("wolf", "swim")]);

        let a = registry.morph("wolf", None).unwrap();
        let b = registry.morph("wolf", None).unwrap();
        assert!(std::ptr::eq(a.settings(), b.settings()));
    }

    #[test]
    fn morph_from_saved_requires_registered_kind() {
        let registry = MorphRegistry::new();
        let saved = SavedMorph {
            name: "ghoul".into(),
            instance: None,
        };

        assert!(matches!(
            registry.morph_from_saved(&saved),
            Err(MorphError::UnknownIdentity { name }) if name == "ghoul"
        ));
    }

    #[test]
    fn blacklist_membership() {
        let mut registry = MorphRegistry::new();
        registry.blacklist_insert("ghost");

        assert!(registry.is_blacklisted("ghost"));
        assert!(!registry.is_blacklisted("wolf"));
    }
}
