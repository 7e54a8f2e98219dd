/// Morph system configuration constants and tunable behavior flags.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Grant a morph outright when its entity kind is defeated, instead of
    /// spawning a collectible ghost.
    pub acquire_immediately: bool,

    /// Disable acquisition-by-kill entirely.
    pub prevent_kill_acquire: bool,

    /// Suppress ghost pickups for identities the killer already owns.
    pub prevent_ghosts: bool,

    /// Skip restoring the default viewpoint height on demorphed actors.
    pub disable_pov: bool,

    /// Disable the hostile-morph disguise against passive AI targeting.
    pub disable_morph_disguise: bool,

    /// Equip a ghost-collected morph immediately on pickup.
    pub auto_equip_on_pickup: bool,
}

impl MorphConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum abilities a single morph kind may carry.
    pub const MAX_ABILITIES: usize = 16;
    /// Maximum actions a single morph kind may carry.
    pub const MAX_ACTIONS: usize = 12;
    /// Maximum deferred tasks pending on one side's queue.
    pub const MAX_DEFERRED_TASKS: usize = 64;

    // ===== runtime thresholds =====
    /// Minimum max-health for which a health ratio is considered meaningful.
    /// Other systems may zero out max health mid-step while rebuilding
    /// attribute modifiers; ratios taken in that window are garbage.
    pub const REASONABLE_MAX_HEALTH: f32 = 1.0;

    pub fn new() -> Self {
        Self {
            acquire_immediately: false,
            prevent_kill_acquire: false,
            prevent_ghosts: false,
            disable_pov: false,
            disable_morph_disguise: false,
            auto_equip_on_pickup: false,
        }
    }
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self::new()
    }
}
