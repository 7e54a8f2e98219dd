//! Test doubles for the host-simulation boundary.
#![allow(dead_code)]

use std::collections::HashMap;

use morph_core::{Actor, ActorId, WorldAccess};

/// In-memory actor recording every effect the core applies to it.
pub struct TestActor {
    pub id: ActorId,
    pub health: f32,
    pub max_health: f32,
    pub eye_height: f32,
    pub default_eye_height: f32,
    pub motion: [f64; 3],
    pub look: [f64; 3],
    pub on_ground: bool,
    pub in_water: bool,
    pub burning: bool,
    pub exposed_to_sun: bool,
    pub horizontal_collision: bool,
    /// (kind, ticks, level) per applied status effect.
    pub effects: Vec<(String, u32, u32)>,
    pub damage_taken: f32,
    pub pushes: Vec<[f64; 3]>,
    pub displacements: Vec<[f64; 3]>,
    pub projectiles: Vec<String>,
    pub explosions: Vec<f32>,
}

impl TestActor {
    pub fn new(id: u64) -> Self {
        Self {
            id: ActorId(id),
            health: 20.0,
            max_health: 20.0,
            eye_height: 1.62,
            default_eye_height: 1.62,
            motion: [0.0; 3],
            look: [1.0, 0.0, 0.0],
            on_ground: true,
            in_water: false,
            burning: false,
            exposed_to_sun: false,
            horizontal_collision: false,
            effects: Vec::new(),
            damage_taken: 0.0,
            pushes: Vec::new(),
            displacements: Vec::new(),
            projectiles: Vec::new(),
            explosions: Vec::new(),
        }
    }
}

impl Actor for TestActor {
    fn id(&self) -> ActorId {
        self.id
    }

    fn health(&self) -> f32 {
        self.health
    }

    fn max_health(&self) -> f32 {
        self.max_health
    }

    fn set_health(&mut self, health: f32) {
        self.health = health;
    }

    fn deal_damage(&mut self, amount: f32) {
        self.damage_taken += amount;
        self.health -= amount;
    }

    fn set_eye_height(&mut self, height: f32) {
        self.eye_height = height;
    }

    fn default_eye_height(&self) -> f32 {
        self.default_eye_height
    }

    fn motion(&self) -> [f64; 3] {
        self.motion
    }

    fn set_motion(&mut self, motion: [f64; 3]) {
        self.motion = motion;
    }

    fn look_dir(&self) -> [f64; 3] {
        self.look
    }

    fn displace(&mut self, dx: f64, dy: f64, dz: f64) {
        self.displacements.push([dx, dy, dz]);
    }

    fn push(&mut self, dx: f64, dy: f64, dz: f64) {
        self.pushes.push([dx, dy, dz]);
    }

    fn on_ground(&self) -> bool {
        self.on_ground
    }

    fn in_water(&self) -> bool {
        self.in_water
    }

    fn burning(&self) -> bool {
        self.burning
    }

    fn exposed_to_sun(&self) -> bool {
        self.exposed_to_sun
    }

    fn horizontal_collision(&self) -> bool {
        self.horizontal_collision
    }

    fn ignite(&mut self, _ticks: u32) {
        self.burning = true;
    }

    fn extinguish(&mut self) {
        self.burning = false;
    }

    fn apply_effect(&mut self, kind: &str, ticks: u32, level: u32) {
        self.effects.push((kind.to_owned(), ticks, level));
    }

    fn launch_projectile(&mut self, kind: &str, _velocity: f64) {
        self.projectiles.push(kind.to_owned());
    }

    fn explode(&mut self, strength: f32) {
        self.explosions.push(strength);
    }
}

/// Flat actor-id-keyed world.
#[derive(Default)]
pub struct TestWorld {
    pub actors: HashMap<ActorId, TestActor>,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, actor: TestActor) -> ActorId {
        let id = actor.id;
        self.actors.insert(id, actor);
        id
    }

    pub fn actor(&self, id: ActorId) -> &TestActor {
        &self.actors[&id]
    }
}

impl WorldAccess for TestWorld {
    fn actor_mut(&mut self, id: ActorId) -> Option<&mut dyn Actor> {
        self.actors.get_mut(&id).map(|actor| actor as &mut dyn Actor)
    }
}
