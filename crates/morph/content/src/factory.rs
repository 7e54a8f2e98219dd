//! Registry assembly from bundled and user-supplied sources.

use std::path::Path;

use morph_core::MorphRegistry;

use crate::loaders::{BlacklistLoader, GHOST_MORPH, ParsedSettings, SettingsLoader};
use crate::pack;

/// Bundled default settings, embedded at compile time.
const DEFAULT_MORPHS: &str = include_str!("../data/morphs.json");

/// Builds ready-to-use registries by layering sources in order: default
/// plugin registrations, bundled settings, user override settings, then
/// the blacklist (sentinel first, user list after).
pub struct ContentFactory;

impl ContentFactory {
    /// Assembles a registry.
    ///
    /// The bundled defaults are load-bearing: if they fail to parse, this
    /// returns an error and the caller should treat startup as failed. A
    /// missing or malformed user file is logged and skipped; the defaults
    /// still apply.
    pub fn build_registry(
        user_settings: Option<&Path>,
        user_blacklist: Option<&Path>,
    ) -> anyhow::Result<MorphRegistry> {
        let mut registry = MorphRegistry::new();
        pack::register_defaults(&mut registry);

        let parsed = SettingsLoader::parse(DEFAULT_MORPHS)
            .map_err(|e| anyhow::anyhow!("bundled morph settings are malformed: {}", e))?;
        report_entry_errors("bundled", &parsed);
        registry.apply_settings(parsed.entries);

        if let Some(path) = user_settings {
            match SettingsLoader::load(path) {
                Ok(parsed) => {
                    report_entry_errors("user", &parsed);
                    registry.apply_settings(parsed.entries);
                }
                Err(err) => {
                    tracing::warn!(
                        target: "morph::content",
                        path = %path.display(),
                        error = %err,
                        "skipping user settings source"
                    );
                }
            }
        }

        registry.blacklist_insert(GHOST_MORPH);
        if let Some(path) = user_blacklist {
            match BlacklistLoader::load(path) {
                Ok(names) => {
                    for name in names {
                        registry.blacklist_insert(name);
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        target: "morph::content",
                        path = %path.display(),
                        error = %err,
                        "skipping user blacklist"
                    );
                }
            }
        }

        Ok(registry)
    }
}

fn report_entry_errors(source: &str, parsed: &ParsedSettings) {
    for error in &parsed.errors {
        tracing::warn!(
            target: "morph::content",
            source,
            error = %error,
            "skipping malformed settings entry"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builds_from_bundled_defaults_alone() {
        let registry = ContentFactory::build_registry(None, None).unwrap();

        assert!(registry.lookup("zombie").is_some());
        assert!(registry.is_blacklisted(GHOST_MORPH));
    }

    #[test]
    fn every_bundled_plugin_reference_resolves() {
        let registry = ContentFactory::build_registry(None, None).unwrap();

        let names: Vec<String> = registry.settings_names().map(str::to_owned).collect();
        for name in names {
            let settings = registry.lookup(&name).unwrap().clone();
            for slot in &settings.abilities {
                assert!(
                    registry.resolve_ability(&slot.name).is_some(),
                    "{name} references unregistered ability {}",
                    slot.name
                );
            }
            for slot in &settings.actions {
                assert!(
                    registry.resolve_action(&slot.name).is_some(),
                    "{name} references unregistered action {}",
                    slot.name
                );
            }
            if let Some(attack) = &settings.attack {
                assert!(
                    registry.resolve_attack(attack).is_some(),
                    "{name} references unregistered attack {attack}"
                );
            }
        }
    }

    #[test]
    fn user_override_merges_on_top_of_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "wolf": {{ "hostile": true, "abilities": ["jumping"] }} }}"#
        )
        .unwrap();

        let registry = ContentFactory::build_registry(Some(file.path()), None).unwrap();

        let wolf = registry.lookup("wolf").unwrap();
        assert!(wolf.is_hostile());
        let names: Vec<&str> = wolf.abilities.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["swim", "jumping"]);
    }

    #[test]
    fn missing_user_files_are_tolerated() {
        let registry = ContentFactory::build_registry(
            Some(Path::new("/nonexistent/morphs.json")),
            Some(Path::new("/nonexistent/blacklist.json")),
        )
        .unwrap();

        assert!(registry.lookup("wolf").is_some());
    }

    #[test]
    fn user_blacklist_extends_the_sentinel() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["wither_skeleton"]"#).unwrap();

        let registry = ContentFactory::build_registry(None, Some(file.path())).unwrap();

        assert!(registry.is_blacklisted(GHOST_MORPH));
        assert!(registry.is_blacklisted("wither_skeleton"));
        assert!(!registry.is_blacklisted("wolf"));
    }
}
