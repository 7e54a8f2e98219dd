//! Default passive abilities.
//!
//! Each ability is a stateless unit struct operating on the host's
//! [`Actor`] surface once per simulation step. The host decides what the
//! resulting motion/effect changes mean physically.

use morph_core::{Ability, Actor, FlightState, PluginRef};

/// Scramble up walls while pressing into them.
pub struct Climb;

impl Ability for Climb {
    fn update(&self, actor: &mut dyn Actor, _slot: &PluginRef, _flight: &mut FlightState) {
        if actor.horizontal_collision() {
            let mut motion = actor.motion();
            motion[1] = motion[1].max(0.2);
            actor.set_motion(motion);
        }
    }
}

/// Immune to burning.
pub struct FireProof;

impl Ability for FireProof {
    fn update(&self, actor: &mut dyn Actor, _slot: &PluginRef, _flight: &mut FlightState) {
        if actor.burning() {
            actor.extinguish();
        }
    }
}

/// Sustained flight: hover instead of falling.
pub struct Fly;

impl Ability for Fly {
    fn update(&self, actor: &mut dyn Actor, _slot: &PluginRef, flight: &mut FlightState) {
        flight.flying = true;
        let mut motion = actor.motion();
        if motion[1] < -0.1 {
            motion[1] = -0.1;
            actor.set_motion(motion);
        }
    }

    fn on_unequip(&self, actor: &mut dyn Actor, _slot: &PluginRef) {
        // leave the actor falling normally, not hovering mid-air
        let mut motion = actor.motion();
        motion[1] = motion[1].min(0.0);
        actor.set_motion(motion);
    }
}

/// Slow, controlled descent while airborne.
pub struct Glide;

impl Ability for Glide {
    fn update(&self, actor: &mut dyn Actor, _slot: &PluginRef, flight: &mut FlightState) {
        let mut motion = actor.motion();
        if !actor.on_ground() && motion[1] < 0.0 {
            motion[1] *= 0.6;
            actor.set_motion(motion);
            flight.gliding = true;
        } else {
            flight.gliding = false;
        }
    }
}

/// Boosted jumps. Reads an optional `power` parameter from the slot.
pub struct Jumping;

impl Ability for Jumping {
    fn update(&self, actor: &mut dyn Actor, slot: &PluginRef, _flight: &mut FlightState) {
        let power = slot.param_u64("power").unwrap_or(1) as u32;
        actor.apply_effect("jump_boost", 5, power);
    }
}

/// See in the dark.
pub struct NightVision;

impl Ability for NightVision {
    fn update(&self, actor: &mut dyn Actor, _slot: &PluginRef, _flight: &mut FlightState) {
        actor.apply_effect("night_vision", 300, 1);
    }
}

/// Land softly no matter the height.
pub struct PreventFall;

impl Ability for PreventFall {
    fn update(&self, actor: &mut dyn Actor, _slot: &PluginRef, _flight: &mut FlightState) {
        let mut motion = actor.motion();
        if !actor.on_ground() && motion[1] < -0.35 {
            motion[1] = -0.35;
            actor.set_motion(motion);
        }
    }
}

/// Catch fire under open sky.
pub struct SunAllergy;

impl Ability for SunAllergy {
    fn update(&self, actor: &mut dyn Actor, _slot: &PluginRef, _flight: &mut FlightState) {
        if actor.exposed_to_sun() && !actor.burning() && !actor.in_water() {
            actor.ignite(40);
        }
    }
}

/// Move through water without sinking.
pub struct Swim;

impl Ability for Swim {
    fn update(&self, actor: &mut dyn Actor, _slot: &PluginRef, _flight: &mut FlightState) {
        if actor.in_water() {
            let mut motion = actor.motion();
            if motion[1] < 0.0 {
                motion[1] *= 0.8;
                actor.set_motion(motion);
            }
        }
    }
}

/// Take damage while in water.
pub struct WaterAllergy;

impl Ability for WaterAllergy {
    fn update(&self, actor: &mut dyn Actor, _slot: &PluginRef, _flight: &mut FlightState) {
        if actor.in_water() {
            actor.deal_damage(1.0);
        }
    }
}

/// Breathe underwater.
pub struct WaterBreath;

impl Ability for WaterBreath {
    fn update(&self, actor: &mut dyn Actor, _slot: &PluginRef, _flight: &mut FlightState) {
        if actor.in_water() {
            actor.apply_effect("water_breathing", 20, 1);
        }
    }
}
