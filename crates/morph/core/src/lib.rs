//! Data model and rules for temporary identity morphing.
//!
//! `morph-core` defines the canonical types: mergeable per-kind settings,
//! the name-keyed plugin registry, morph instances, and per-actor
//! capability state. The crate is pure (no I/O, no host coupling) and the
//! orchestration crate drives everything through the traits exported here.
pub mod abilities;
pub mod actor;
pub mod capability;
pub mod config;
pub mod error;
pub mod morph;
pub mod registry;
pub mod settings;
pub mod tasks;

pub use abilities::{Ability, AttackEffect, MorphAction};
pub use actor::{Actor, ActorId, WorldAccess};
pub use capability::{Capability, SavedCapability};
pub use config::MorphConfig;
pub use error::MorphError;
pub use morph::{FlightState, Morph, SavedMorph};
pub use registry::MorphRegistry;
pub use settings::{MorphSettings, PluginRef};
pub use tasks::{DeferredTask, DeferredTaskQueue, TaskSink};
