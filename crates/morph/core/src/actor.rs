//! Traits describing the host-simulation surface the morph core needs.
//!
//! The host world owns entity simulation (movement, rendering, physics).
//! [`Actor`] is the slice of one entity the core's abilities, actions, and
//! attack effects operate through; [`WorldAccess`] lets deferred tasks
//! re-find their target actor at execution time. Concrete implementations
//! live in the host, keeping the core free of any engine coupling.

/// Stable identifier the host assigns to each simulated actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ActorId(pub u64);

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Host-implemented view of a single entity.
///
/// Every method corresponds to something a default-pack plugin or the tick
/// coordinator needs; nothing here prescribes how the host simulates it.
pub trait Actor {
    fn id(&self) -> ActorId;

    // ===== health =====
    fn health(&self) -> f32;
    fn max_health(&self) -> f32;
    fn set_health(&mut self, health: f32);
    /// Apply plain damage to this actor.
    fn deal_damage(&mut self, amount: f32);

    // ===== viewpoint =====
    fn set_eye_height(&mut self, height: f32);
    fn default_eye_height(&self) -> f32;

    // ===== movement =====
    fn motion(&self) -> [f64; 3];
    fn set_motion(&mut self, motion: [f64; 3]);
    /// Unit vector the actor is looking along.
    fn look_dir(&self) -> [f64; 3];
    /// Instantly move the actor by the given offset.
    fn displace(&mut self, dx: f64, dy: f64, dz: f64);
    /// Apply an impulse (knockback and similar shoves).
    fn push(&mut self, dx: f64, dy: f64, dz: f64);

    // ===== environment probes =====
    fn on_ground(&self) -> bool;
    fn in_water(&self) -> bool;
    fn burning(&self) -> bool;
    fn exposed_to_sun(&self) -> bool;
    /// Whether the actor is pressing into a wall this step.
    fn horizontal_collision(&self) -> bool;

    // ===== world effects =====
    fn ignite(&mut self, ticks: u32);
    fn extinguish(&mut self);
    /// Apply a named status effect at the given amplifier level for a
    /// duration in simulation steps.
    fn apply_effect(&mut self, kind: &str, ticks: u32, level: u32);
    /// Launch a named projectile along the actor's look direction.
    fn launch_projectile(&mut self, kind: &str, velocity: f64);
    /// Detonate an explosion centered on the actor.
    fn explode(&mut self, strength: f32);
}

/// Host-implemented lookup from actor id to live actor.
///
/// Handed to deferred tasks when they run, since a task queued on one step
/// cannot soundly hold a mutable borrow into the host world until a later
/// step.
pub trait WorldAccess {
    fn actor_mut(&mut self, id: ActorId) -> Option<&mut dyn Actor>;
}
