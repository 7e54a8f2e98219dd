//! Default triggered actions.

use morph_core::{Actor, MorphAction, MorphError, PluginRef};

/// Detonate an explosion centered on the actor.
pub struct Explode;

impl MorphAction for Explode {
    fn execute(&self, actor: &mut dyn Actor, slot: &PluginRef) -> Result<(), MorphError> {
        let strength = slot.param_f64("strength").unwrap_or(2.0) as f32;
        actor.explode(strength);
        Ok(())
    }
}

/// Launch an explosive fireball along the look direction.
pub struct Fireball;

impl MorphAction for Fireball {
    fn execute(&self, actor: &mut dyn Actor, _slot: &PluginRef) -> Result<(), MorphError> {
        actor.launch_projectile("fireball", 1.5);
        Ok(())
    }
}

/// A single powered leap.
pub struct Jump;

impl MorphAction for Jump {
    fn execute(&self, actor: &mut dyn Actor, slot: &PluginRef) -> Result<(), MorphError> {
        let power = slot.param_f64("power").unwrap_or(0.9);
        actor.push(0.0, power, 0.0);
        Ok(())
    }
}

/// Throw a snowball.
pub struct Snowball;

impl MorphAction for Snowball {
    fn execute(&self, actor: &mut dyn Actor, _slot: &PluginRef) -> Result<(), MorphError> {
        actor.launch_projectile("snowball", 1.5);
        Ok(())
    }
}

/// Blink along the look direction.
pub struct Teleport;

impl MorphAction for Teleport {
    fn execute(&self, actor: &mut dyn Actor, slot: &PluginRef) -> Result<(), MorphError> {
        let range = slot.param_f64("range").unwrap_or(16.0);
        let [dx, dy, dz] = actor.look_dir();
        actor.displace(dx * range, dy * range, dz * range);
        Ok(())
    }
}
