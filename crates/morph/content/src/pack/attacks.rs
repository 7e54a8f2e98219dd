//! Default on-hit attack effects.

use morph_core::{Actor, AttackEffect, TaskSink};

/// Poisons the victim.
pub struct PoisonAttack;

impl AttackEffect for PoisonAttack {
    fn apply(&self, _attacker: &mut dyn Actor, target: &mut dyn Actor, _tasks: &mut TaskSink<'_>) {
        target.apply_effect("poison", 100, 1);
    }
}

/// Withers the victim.
pub struct WitherAttack;

impl AttackEffect for WitherAttack {
    fn apply(&self, _attacker: &mut dyn Actor, target: &mut dyn Actor, _tasks: &mut TaskSink<'_>) {
        target.apply_effect("wither", 100, 1);
    }
}

/// Shoves the victim away on a later step, through the deferred queue,
/// so a flurry of hits cannot launch the victim in a single instant.
pub struct KnockbackAttack;

impl AttackEffect for KnockbackAttack {
    fn apply(&self, attacker: &mut dyn Actor, target: &mut dyn Actor, tasks: &mut TaskSink<'_>) {
        let target_id = target.id();
        let [dx, _, dz] = attacker.look_dir();

        tasks.push(Box::new(move |world| {
            if let Some(target) = world.actor_mut(target_id) {
                target.push(dx * 1.5, 0.4, dz * 1.5);
            }
        }));
    }
}
