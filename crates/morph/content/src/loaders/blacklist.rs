//! Blacklist source loader.
//!
//! A blacklist is a flat JSON array of morph names that can never be
//! equipped or acquired. The pickup entity's own kind is always
//! blacklisted (harvesting a ghost must never yield a "ghost" morph) and
//! is inserted before any user-supplied list is merged in.

use std::path::Path;

use serde_json::Value;

use crate::loaders::{LoadResult, read_file};

/// Built-in always-blacklisted sentinel: the ghost pickup's own kind.
pub const GHOST_MORPH: &str = "ghost";

/// Loader for blacklist JSON documents.
pub struct BlacklistLoader;

impl BlacklistLoader {
    /// Parses a blacklist from a string.
    pub fn parse(text: &str) -> LoadResult<Vec<String>> {
        let doc: Value = serde_json::from_str(text)
            .map_err(|e| anyhow::anyhow!("Failed to parse blacklist JSON: {}", e))?;
        let Value::Array(items) = doc else {
            anyhow::bail!("blacklist document must be a JSON array of morph names");
        };

        let mut names = Vec::with_capacity(items.len());
        for item in &items {
            let Some(name) = item.as_str() else {
                anyhow::bail!("blacklist entries must be strings, found: {}", item);
            };
            names.push(name.to_owned());
        }
        Ok(names)
    }

    /// Parses a blacklist from a file.
    pub fn load(path: &Path) -> LoadResult<Vec<String>> {
        Self::parse(&read_file(path)?)
    }
}
