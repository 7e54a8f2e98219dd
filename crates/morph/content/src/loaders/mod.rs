//! Loaders for reading morph data from files.
//!
//! Settings documents and blacklists are JSON; parsing is schema-driven so
//! a malformed entry produces a structured error instead of poisoning the
//! whole source.

pub mod blacklist;
pub mod settings;

pub use blacklist::{BlacklistLoader, GHOST_MORPH};
pub use settings::{ParsedSettings, SettingsError, SettingsLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
