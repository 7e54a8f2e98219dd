//! Default plugin pack.
//!
//! Registers the bundled abilities, actions, and attack effects under the
//! names the bundled settings document refers to. Registration happens
//! once at startup, before any settings source loads.

pub mod abilities;
pub mod actions;
pub mod attacks;

use std::sync::Arc;

use morph_core::MorphRegistry;

use abilities::{
    Climb, FireProof, Fly, Glide, Jumping, NightVision, PreventFall, SunAllergy, Swim,
    WaterAllergy, WaterBreath,
};
use actions::{Explode, Fireball, Jump, Snowball, Teleport};
use attacks::{KnockbackAttack, PoisonAttack, WitherAttack};

/// Registers every bundled plugin.
pub fn register_defaults(registry: &mut MorphRegistry) {
    // abilities
    registry.register_ability("climb", Arc::new(Climb));
    registry.register_ability("fire_proof", Arc::new(FireProof));
    registry.register_ability("fly", Arc::new(Fly));
    registry.register_ability("glide", Arc::new(Glide));
    registry.register_ability("jumping", Arc::new(Jumping));
    registry.register_ability("night_vision", Arc::new(NightVision));
    registry.register_ability("prevent_fall", Arc::new(PreventFall));
    registry.register_ability("sun_allergy", Arc::new(SunAllergy));
    registry.register_ability("swim", Arc::new(Swim));
    registry.register_ability("water_allergy", Arc::new(WaterAllergy));
    registry.register_ability("water_breath", Arc::new(WaterBreath));

    // actions
    registry.register_action("explode", Arc::new(Explode));
    registry.register_action("fireball", Arc::new(Fireball));
    registry.register_action("jump", Arc::new(Jump));
    registry.register_action("snowball", Arc::new(Snowball));
    registry.register_action("teleport", Arc::new(Teleport));

    // attacks
    registry.register_attack("knockback", Arc::new(KnockbackAttack));
    registry.register_attack("poison", Arc::new(PoisonAttack));
    registry.register_attack("wither", Arc::new(WitherAttack));
}
