//! Bundled morph content: default plugins, settings sources, and loaders.
//!
//! This crate turns data files into a populated
//! [`MorphRegistry`](morph_core::MorphRegistry): the default
//! ability/action/attack pack, the embedded default settings document, and
//! schema-driven loaders for user-supplied overrides and blacklists.
pub mod factory;
pub mod loaders;
pub mod pack;

pub use factory::ContentFactory;
pub use loaders::{
    BlacklistLoader, GHOST_MORPH, LoadResult, ParsedSettings, SettingsError, SettingsLoader,
};
pub use pack::register_defaults;
