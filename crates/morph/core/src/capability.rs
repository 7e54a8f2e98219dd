//! Per-actor morphing state.

use std::collections::BTreeSet;

use crate::morph::{Morph, SavedMorph};
use crate::registry::MorphRegistry;

/// State attached to one actor for its lifetime: the morph it currently
/// wears (if any), the identities it may freely re-equip, and the last
/// meaningful health ratio observed for it.
///
/// The acquired set only grows during normal play; `current` is `None`
/// exactly when the actor is demorphed.
#[derive(Debug)]
pub struct Capability {
    current: Option<Morph>,
    acquired: BTreeSet<String>,
    last_health_ratio: f32,
}

impl Default for Capability {
    fn default() -> Self {
        Self {
            current: None,
            acquired: BTreeSet::new(),
            last_health_ratio: 1.0,
        }
    }
}

impl Capability {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== current morph =====

    pub fn is_morphed(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Morph> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut Morph> {
        self.current.as_mut()
    }

    pub fn set_current(&mut self, morph: Morph) {
        self.current = Some(morph);
    }

    /// Removes and returns the current morph (ordinary demorph path).
    pub fn take_current(&mut self) -> Option<Morph> {
        self.current.take()
    }

    /// Drops the current morph without returning it. Used for the forced
    /// demorph after a failed update, where the morph's state is no longer
    /// trusted enough to run detach hooks against.
    pub fn clear_current(&mut self) {
        self.current = None;
    }

    // ===== acquired identities =====

    /// Records an identity as acquired. Returns `true` if it was new.
    pub fn acquire(&mut self, name: &str) -> bool {
        self.acquired.insert(name.to_owned())
    }

    pub fn has_acquired(&self, name: &str) -> bool {
        self.acquired.contains(name)
    }

    pub fn acquired(&self) -> impl Iterator<Item = &str> {
        self.acquired.iter().map(String::as_str)
    }

    pub fn acquired_count(&self) -> usize {
        self.acquired.len()
    }

    // ===== health ratio =====

    pub fn last_health_ratio(&self) -> f32 {
        self.last_health_ratio
    }

    /// Stores a health ratio, clamped into `[0, 1]`.
    pub fn set_last_health_ratio(&mut self, ratio: f32) {
        self.last_health_ratio = ratio.clamp(0.0, 1.0);
    }

    // ===== persistence =====

    pub fn to_saved(&self) -> SavedCapability {
        SavedCapability {
            morph: self.current.as_ref().map(Morph::to_saved),
            acquired: self.acquired.iter().cloned().collect(),
            last_health_ratio: self.last_health_ratio,
        }
    }

    /// Restores capability state from persisted data.
    ///
    /// A saved current morph whose kind is no longer registered degrades to
    /// the demorphed state with a warning; the acquired list is kept
    /// verbatim so the identity is not lost if the kind returns later.
    pub fn from_saved(saved: &SavedCapability, registry: &MorphRegistry) -> Self {
        let current = saved.morph.as_ref().and_then(|saved_morph| {
            match registry.morph_from_saved(saved_morph) {
                Ok(morph) => Some(morph),
                Err(err) => {
                    tracing::warn!(
                        target: "morph::capability",
                        morph = %saved_morph.name,
                        error = %err,
                        "dropping saved current morph"
                    );
                    None
                }
            }
        });

        let mut capability = Self {
            current,
            acquired: saved.acquired.iter().cloned().collect(),
            last_health_ratio: 1.0,
        };
        capability.set_last_health_ratio(saved.last_health_ratio);
        capability
    }
}

/// Persisted per-actor morph state. Every field defaults so records written
/// by older versions (or with fields added later) still load.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SavedCapability {
    pub morph: Option<SavedMorph>,
    pub acquired: Vec<String>,
    pub last_health_ratio: f32,
}

impl Default for SavedCapability {
    fn default() -> Self {
        Self {
            morph: None,
            acquired: Vec::new(),
            last_health_ratio: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MorphSettings;

    #[test]
    fn acquire_reports_newness_and_only_grows() {
        let mut capability = Capability::new();

        assert!(capability.acquire("zombie"));
        assert!(!capability.acquire("zombie"));
        assert!(capability.acquire("wolf"));
        assert_eq!(capability.acquired_count(), 2);
    }

    #[test]
    fn health_ratio_is_clamped() {
        let mut capability = Capability::new();
        capability.set_last_health_ratio(3.5);
        assert_eq!(capability.last_health_ratio(), 1.0);

        capability.set_last_health_ratio(-0.2);
        assert_eq!(capability.last_health_ratio(), 0.0);
    }

    #[test]
    fn saved_state_roundtrips_through_registry() {
        let mut registry = MorphRegistry::new();
        registry.apply_settings([MorphSettings::new("wolf")]);

        let mut capability = Capability::new();
        capability.acquire("wolf");
        capability.set_current(registry.morph("wolf", None).unwrap());
        capability.set_last_health_ratio(0.5);

        let restored = Capability::from_saved(&capability.to_saved(), &registry);
        assert_eq!(restored.current().unwrap().name(), "wolf");
        assert!(restored.has_acquired("wolf"));
        assert_eq!(restored.last_health_ratio(), 0.5);
    }

    #[test]
    fn unknown_saved_morph_degrades_to_demorphed() {
        let registry = MorphRegistry::new();
        let saved = SavedCapability {
            morph: Some(SavedMorph {
                name: "ghoul".into(),
                instance: None,
            }),
            acquired: vec!["ghoul".into()],
            last_health_ratio: 0.8,
        };

        let restored = Capability::from_saved(&saved, &registry);
        assert!(!restored.is_morphed());
        // identity is not lost, only the equipped morph
        assert!(restored.has_acquired("ghoul"));
    }

    #[test]
    fn saved_records_tolerate_unknown_fields() {
        let json = r#"{
            "morph": null,
            "acquired": ["zombie"],
            "last_health_ratio": 0.25,
            "favorite_slot": 3
        }"#;

        let saved: SavedCapability = serde_json::from_str(json).unwrap();
        assert_eq!(saved.acquired, ["zombie"]);
        assert_eq!(saved.last_health_ratio, 0.25);
    }
}
