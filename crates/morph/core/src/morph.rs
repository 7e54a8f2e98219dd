//! Resolved, equippable morph instances.

use std::sync::Arc;

use crate::actor::Actor;
use crate::error::MorphError;
use crate::registry::MorphRegistry;
use crate::settings::MorphSettings;
use crate::tasks::TaskSink;

/// Instance-local runtime state abilities may toggle mid-update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlightState {
    /// Currently gliding (slow-falling with spread wings).
    pub gliding: bool,
    /// Currently in sustained flight.
    pub flying: bool,
}

/// A usable identity an actor can wear.
///
/// Holds a shared, read-only reference to the kind's settings plus optional
/// captured per-individual attributes (a specific mob's name tag, size,
/// ...), copied at acquisition time and owned exclusively by this instance.
/// Immutable after construction except for [`FlightState`].
#[derive(Clone, Debug)]
pub struct Morph {
    settings: Arc<MorphSettings>,
    instance: Option<serde_json::Value>,
    pub flight: FlightState,
}

impl Morph {
    pub fn new(settings: Arc<MorphSettings>, instance: Option<serde_json::Value>) -> Self {
        Self {
            settings,
            instance,
            flight: FlightState::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.settings.name
    }

    pub fn settings(&self) -> &MorphSettings {
        &self.settings
    }

    pub fn instance(&self) -> Option<&serde_json::Value> {
        self.instance.as_ref()
    }

    /// Runs every listed ability's per-step update, in list order.
    ///
    /// Fails on the first ability name that no longer resolves (possible
    /// after a registry reload removed a plugin); the caller decides what a
    /// failed update means for the wearer.
    pub fn update(
        &mut self,
        actor: &mut dyn Actor,
        registry: &MorphRegistry,
    ) -> Result<(), MorphError> {
        let settings = Arc::clone(&self.settings);
        for slot in &settings.abilities {
            let ability = registry
                .resolve_ability(&slot.name)
                .ok_or_else(|| MorphError::unknown_ability(&slot.name))?;
            ability.update(actor, slot, &mut self.flight);
        }
        Ok(())
    }

    /// Applies this kind's on-hit attack effect, if it has one.
    pub fn attack(
        &self,
        attacker: &mut dyn Actor,
        target: &mut dyn Actor,
        registry: &MorphRegistry,
        tasks: &mut TaskSink<'_>,
    ) -> Result<(), MorphError> {
        let Some(attack_name) = &self.settings.attack else {
            return Ok(());
        };
        let effect = registry
            .resolve_attack(attack_name)
            .ok_or_else(|| MorphError::unknown_attack(attack_name))?;
        effect.apply(attacker, target, tasks);
        Ok(())
    }

    /// Executes the morph's actions in list order.
    pub fn perform_actions(
        &self,
        actor: &mut dyn Actor,
        registry: &MorphRegistry,
    ) -> Result<(), MorphError> {
        for slot in &self.settings.actions {
            let action = registry
                .resolve_action(&slot.name)
                .ok_or_else(|| MorphError::unknown_action(&slot.name))?;
            action.execute(actor, slot)?;
        }
        Ok(())
    }

    /// Runs ability attach hooks. Unresolvable abilities are skipped with a
    /// warning so an equip can never half-fail.
    pub fn on_equip(&self, actor: &mut dyn Actor, registry: &MorphRegistry) {
        for slot in &self.settings.abilities {
            match registry.resolve_ability(&slot.name) {
                Some(ability) => ability.on_equip(actor, slot),
                None => tracing::warn!(
                    target: "morph::morph",
                    morph = %self.settings.name,
                    ability = %slot.name,
                    "skipping attach hook for unknown ability"
                ),
            }
        }
    }

    /// Runs ability detach hooks; same leniency as [`Morph::on_equip`].
    pub fn on_unequip(&self, actor: &mut dyn Actor, registry: &MorphRegistry) {
        for slot in &self.settings.abilities {
            match registry.resolve_ability(&slot.name) {
                Some(ability) => ability.on_unequip(actor, slot),
                None => tracing::warn!(
                    target: "morph::morph",
                    morph = %self.settings.name,
                    ability = %slot.name,
                    "skipping detach hook for unknown ability"
                ),
            }
        }
    }

    pub fn to_saved(&self) -> SavedMorph {
        SavedMorph {
            name: self.settings.name.clone(),
            instance: self.instance.clone(),
        }
    }
}

/// Persisted form of a morph: identity plus captured attribute blob.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SavedMorph {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<serde_json::Value>,
}
