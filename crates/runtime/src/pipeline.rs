//! Acquisition of morphs from defeated entities.
//!
//! A defeat signal moves through a small state machine: the event is
//! either ignored outright, or its victim's kind is resolved against the
//! registry, and the resolved identity is then auto-granted, spawned as a
//! collectible ghost, or suppressed. The host delivers each defeat event
//! at most once per actual kill; within one event the resolution and the
//! grant/spawn decision each happen exactly once.

use morph_core::{ActorId, Morph, MorphConfig, MorphRegistry, WorldAccess};

use crate::api;
use crate::store::CapabilityStore;

/// A "target defeated" signal from the host simulation.
#[derive(Clone, Debug)]
pub struct DefeatEvent {
    /// Actor credited with the kill.
    pub killer: ActorId,
    /// Whether the killer is a non-authoritative stand-in (command blocks,
    /// scripted proxies) rather than a real actor.
    pub killer_is_standin: bool,
    /// Entity kind of the victim; doubles as the registry key.
    pub victim_kind: String,
    /// Whether the victim is itself a morph-capable actor (another
    /// player); those are never harvested.
    pub victim_is_actor: bool,
    /// Whether the kill happened on the authoritative side (replays and
    /// previews deliver non-authoritative events).
    pub authoritative: bool,
    /// Where the victim died; ghosts spawn here.
    pub position: [f64; 3],
    pub yaw: f32,
    pub pitch: f32,
    /// Capturable per-individual attributes of the victim, serialized by
    /// the host at defeat time.
    pub instance_data: Option<serde_json::Value>,
}

/// A pickup-entity spawn request handed to the host.
#[derive(Clone, Debug)]
pub struct GhostRequest {
    pub position: [f64; 3],
    pub yaw: f32,
    pub pitch: f32,
    /// Actor whose kill produced the ghost.
    pub owner: ActorId,
    /// Proposed payload; a hook clearing this suppresses the spawn.
    pub morph: Option<Morph>,
}

/// External veto point consulted before a ghost is spawned.
///
/// Returning `false`, or clearing the request's morph payload, suppresses
/// the spawn. The hook may also replace the payload.
pub trait GhostHook {
    fn before_spawn(&mut self, _request: &mut GhostRequest) -> bool {
        true
    }
}

/// Hook that lets every ghost through untouched.
pub struct NoopGhostHook;

impl GhostHook for NoopGhostHook {}

/// Why a defeat event produced nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum IgnoreReason {
    /// Kill delivered from a replay/preview context.
    NonAuthoritative,
    /// Killer is a scripted stand-in actor.
    StandinKiller,
    /// Victim is another morph-capable actor.
    VictimIsActor,
    /// Acquisition-by-kill is disabled by configuration.
    Disabled,
    /// Killer has no capability attached.
    NoCapability,
    /// Victim kind resolved to no registry entry.
    UnknownIdentity,
    /// Resolved identity may never be acquired.
    Blacklisted,
}

/// Terminal state of the acquisition state machine for one defeat event.
#[derive(Debug)]
pub enum AcquisitionOutcome {
    /// Event produced no state change.
    Ignored(IgnoreReason),
    /// Identity granted outright; no pickup spawned.
    AutoGranted,
    /// Pickup spawn requested; the host instantiates the ghost.
    GhostSpawned(GhostRequest),
    /// Pickup vetoed, payload cleared, or duplicate suppressed.
    GhostSuppressed,
}

/// Turns defeat events into grants and ghost-spawn requests.
pub struct AcquisitionPipeline {
    config: MorphConfig,
}

impl AcquisitionPipeline {
    pub fn new(config: MorphConfig) -> Self {
        Self { config }
    }

    /// Processes one defeat event.
    pub fn on_defeat(
        &self,
        event: &DefeatEvent,
        store: &mut CapabilityStore,
        registry: &MorphRegistry,
        hook: &mut dyn GhostHook,
    ) -> AcquisitionOutcome {
        if !event.authoritative {
            return AcquisitionOutcome::Ignored(IgnoreReason::NonAuthoritative);
        }
        if event.killer_is_standin {
            return AcquisitionOutcome::Ignored(IgnoreReason::StandinKiller);
        }
        if event.victim_is_actor {
            return AcquisitionOutcome::Ignored(IgnoreReason::VictimIsActor);
        }
        if self.config.prevent_kill_acquire {
            return AcquisitionOutcome::Ignored(IgnoreReason::Disabled);
        }
        let Some(capability) = store.get_mut(event.killer) else {
            return AcquisitionOutcome::Ignored(IgnoreReason::NoCapability);
        };

        // Identity resolution: the victim's kind is the registry key.
        let name = event.victim_kind.as_str();
        if registry.is_blacklisted(name) {
            return AcquisitionOutcome::Ignored(IgnoreReason::Blacklisted);
        }
        let Ok(morph) = registry.morph(name, event.instance_data.clone()) else {
            tracing::warn!(
                target: "morph::acquire",
                kind = name,
                "defeated entity kind has no morph entry"
            );
            return AcquisitionOutcome::Ignored(IgnoreReason::UnknownIdentity);
        };

        let already_acquired = capability.has_acquired(name);

        if self.config.acquire_immediately && !already_acquired {
            capability.acquire(name);
            tracing::debug!(
                target: "morph::acquire",
                killer = %event.killer,
                morph = name,
                "identity granted on kill"
            );
            return AcquisitionOutcome::AutoGranted;
        }

        if self.config.prevent_ghosts && already_acquired {
            return AcquisitionOutcome::GhostSuppressed;
        }

        let mut request = GhostRequest {
            position: event.position,
            yaw: event.yaw,
            pitch: event.pitch,
            owner: event.killer,
            morph: Some(morph),
        };
        if !hook.before_spawn(&mut request) || request.morph.is_none() {
            return AcquisitionOutcome::GhostSuppressed;
        }

        tracing::debug!(
            target: "morph::acquire",
            killer = %event.killer,
            morph = name,
            "ghost spawn requested"
        );
        AcquisitionOutcome::GhostSpawned(request)
    }
}

/// An actor collected a spawned ghost.
///
/// Transitions the picker's capability the way an auto-grant would:
/// identity added, and (if configured) the morph equipped on the spot.
/// Returns whether the identity was newly acquired.
pub fn collect_ghost(
    picker: ActorId,
    morph: Morph,
    world: &mut dyn WorldAccess,
    store: &mut CapabilityStore,
    registry: &MorphRegistry,
    config: &MorphConfig,
) -> bool {
    if registry.is_blacklisted(morph.name()) {
        tracing::warn!(
            target: "morph::acquire",
            morph = morph.name(),
            "refusing pickup of blacklisted morph"
        );
        return false;
    }

    let capability = store.attach(picker);
    let newly_acquired = capability.acquire(morph.name());

    if config.auto_equip_on_pickup {
        if let Some(actor) = world.actor_mut(picker) {
            api::equip_morph(actor, capability, registry, morph);
        }
    }

    newly_acquired
}
