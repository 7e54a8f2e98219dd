//! Combat-side morph effects.

use morph_core::{Actor, ActorId, Capability, MorphError, MorphRegistry};

use crate::coordinator::{Side, TickCoordinator};
use crate::store::CapabilityStore;

/// Applies the attacker's morph attack effect to a landed hit.
///
/// No-op when the attacker is unmorphed or has no capability. Delayed
/// effects (knockback) are queued on `side`'s deferred queue and run on
/// later steps, one per step.
pub fn dispatch_attack(
    attacker: &mut dyn Actor,
    target: &mut dyn Actor,
    store: &CapabilityStore,
    registry: &MorphRegistry,
    coordinator: &mut TickCoordinator,
    side: Side,
) -> Result<(), MorphError> {
    let Some(capability) = store.get(attacker.id()) else {
        return Ok(());
    };
    let Some(morph) = capability.current() else {
        return Ok(());
    };

    let mut sink = coordinator.task_sink(side);
    morph.attack(attacker, target, registry, &mut sink)
}

/// Decides whether passive AI target-acquisition against `target` should
/// be cancelled.
///
/// A hostile-flagged morph disguises its wearer from incidental hostile
/// targeting, but not from AI the wearer already provoked directly. The
/// host applies the cancellation; this only decides.
pub fn should_cancel_targeting(
    store: &CapabilityStore,
    target: ActorId,
    provoked: bool,
    coordinator: &TickCoordinator,
) -> bool {
    if coordinator.config().disable_morph_disguise || provoked {
        return false;
    }

    store
        .get(target)
        .and_then(Capability::current)
        .is_some_and(|morph| morph.settings().is_hostile())
}
