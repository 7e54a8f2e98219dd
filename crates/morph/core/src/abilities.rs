//! Plugin interfaces for morph behavior.
//!
//! Abilities, actions, and attack effects are registered by name in the
//! [`MorphRegistry`](crate::MorphRegistry) and resolved polymorphically
//! whenever a morph needs them. Implementations are stateless values; any
//! per-morph runtime state lives on the morph's [`FlightState`] and any
//! per-slot tuning arrives through the [`PluginRef`] parameters.

use crate::actor::Actor;
use crate::error::MorphError;
use crate::morph::FlightState;
use crate::settings::PluginRef;
use crate::tasks::TaskSink;

/// Passive behavior applied on every simulation step while morphed.
///
/// Gliding, climbing, allergies and the like. `update` runs once per step
/// per listed ability, in list order.
pub trait Ability: Send + Sync {
    fn update(&self, actor: &mut dyn Actor, slot: &PluginRef, flight: &mut FlightState);

    /// Called when a morph carrying this ability is equipped.
    fn on_equip(&self, _actor: &mut dyn Actor, _slot: &PluginRef) {}

    /// Called when a morph carrying this ability is removed.
    fn on_unequip(&self, _actor: &mut dyn Actor, _slot: &PluginRef) {}
}

/// Player-triggered special move (fireball, explode, teleport, ...).
pub trait MorphAction: Send + Sync {
    fn execute(&self, actor: &mut dyn Actor, slot: &PluginRef) -> Result<(), MorphError>;
}

/// Bonus effect applied when a morphed actor lands a hit.
///
/// Immediate effects act on `target` directly; delayed effects (knockback)
/// go through `tasks` so they run on a later step, throttled to one per
/// step per simulation side.
pub trait AttackEffect: Send + Sync {
    fn apply(&self, attacker: &mut dyn Actor, target: &mut dyn Actor, tasks: &mut TaskSink<'_>);
}
