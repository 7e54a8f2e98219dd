//! Equip, demorph, and acquire requests from outside the core.

use morph_core::{Actor, Capability, Morph, MorphConfig, MorphError, MorphRegistry, SavedMorph};

/// Marks an identity as acquired. Returns whether it was new.
pub fn acquire(
    capability: &mut Capability,
    registry: &MorphRegistry,
    name: &str,
) -> Result<bool, MorphError> {
    if registry.is_blacklisted(name) {
        return Err(MorphError::Blacklisted {
            name: name.to_owned(),
        });
    }
    Ok(capability.acquire(name))
}

/// Equips a morph by name.
///
/// The identity must have been acquired unless `force` is set (admin and
/// creative flows bypass the check). Blacklisted names are refused either
/// way.
pub fn equip(
    actor: &mut dyn Actor,
    capability: &mut Capability,
    registry: &MorphRegistry,
    name: &str,
    force: bool,
) -> Result<(), MorphError> {
    if registry.is_blacklisted(name) {
        return Err(MorphError::Blacklisted {
            name: name.to_owned(),
        });
    }
    if !force && !capability.has_acquired(name) {
        return Err(MorphError::NotAcquired {
            name: name.to_owned(),
        });
    }

    let morph = registry.morph(name, None)?;
    equip_morph(actor, capability, registry, morph);
    Ok(())
}

/// Re-equips a persisted morph on actor load.
pub fn equip_from_saved(
    actor: &mut dyn Actor,
    capability: &mut Capability,
    registry: &MorphRegistry,
    saved: &SavedMorph,
) -> Result<(), MorphError> {
    let morph = registry.morph_from_saved(saved)?;
    equip_morph(actor, capability, registry, morph);
    Ok(())
}

/// Swaps the current morph for `morph`, running detach hooks for the old
/// one and attach hooks for the new one, then rescales health so the
/// wearer keeps its health *ratio* across the (possibly very different)
/// max-health values of the two shapes.
pub fn equip_morph(
    actor: &mut dyn Actor,
    capability: &mut Capability,
    registry: &MorphRegistry,
    morph: Morph,
) {
    if let Some(old) = capability.take_current() {
        old.on_unequip(actor, registry);
    }

    morph.on_equip(actor, registry);
    tracing::debug!(
        target: "morph::api",
        actor = %actor.id(),
        morph = morph.name(),
        "morph equipped"
    );
    capability.set_current(morph);

    rescale_health(actor, capability);
}

/// Executes the current morph's actions in list order (the host calls
/// this when the wearer triggers its special move).
pub fn trigger_actions(
    actor: &mut dyn Actor,
    capability: &Capability,
    registry: &MorphRegistry,
) -> Result<(), MorphError> {
    match capability.current() {
        Some(morph) => morph.perform_actions(actor, registry),
        None => Ok(()),
    }
}

/// Removes the current morph, if any, and restores the health ratio.
pub fn demorph(actor: &mut dyn Actor, capability: &mut Capability, registry: &MorphRegistry) {
    let Some(old) = capability.take_current() else {
        return;
    };
    old.on_unequip(actor, registry);
    tracing::debug!(
        target: "morph::api",
        actor = %actor.id(),
        morph = old.name(),
        "morph removed"
    );

    rescale_health(actor, capability);
}

/// Applies the last meaningful health ratio to the actor's current max
/// health. Skipped while max health reads as nonsense (mid-rebuild).
fn rescale_health(actor: &mut dyn Actor, capability: &Capability) {
    let max_health = actor.max_health();
    if max_health > MorphConfig::REASONABLE_MAX_HEALTH {
        actor.set_health(capability.last_health_ratio() * max_health);
    }
}
