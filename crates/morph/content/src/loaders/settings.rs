//! Schema-driven parser for morph settings sources.
//!
//! A settings source is a JSON object mapping morph names to entries:
//!
//! ```json
//! {
//!     "wolf": { "abilities": ["swim"] },
//!     "rabbit": { "abilities": [{ "name": "jumping", "power": 2 }] },
//!     "spider": { "hostile": true, "attack": "poison" }
//! }
//! ```
//!
//! Each field is validated explicitly. A malformed entry is reported and
//! skipped while the rest of the document still loads; a document that is
//! not valid JSON (or not an object) aborts the whole source, leaving the
//! registry exactly as it was.

use std::path::Path;

use arrayvec::ArrayVec;
use serde_json::Value;

use morph_core::{MorphSettings, PluginRef};

use crate::loaders::{LoadResult, read_file};

/// Outcome of parsing one settings source: the entries that validated,
/// plus a structured error per entry that did not.
#[derive(Debug)]
pub struct ParsedSettings {
    pub entries: Vec<MorphSettings>,
    pub errors: Vec<SettingsError>,
}

/// Field-level validation failures for a single settings entry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("morph '{entry}': expected an object, found {found}")]
    EntryNotAnObject { entry: String, found: &'static str },

    #[error("morph '{entry}': field '{field}' must be {expected}")]
    FieldType {
        entry: String,
        field: String,
        expected: &'static str,
    },

    #[error("morph '{entry}': list '{field}' exceeds the limit of {limit}")]
    ListTooLong {
        entry: String,
        field: String,
        limit: usize,
    },

    #[error("morph '{entry}': an item in '{field}' is missing a name")]
    MissingName { entry: String, field: String },
}

/// Loader for morph settings JSON documents.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Parses a settings document from a string.
    pub fn parse(text: &str) -> LoadResult<ParsedSettings> {
        let doc: Value = serde_json::from_str(text)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings JSON: {}", e))?;
        let Value::Object(map) = doc else {
            anyhow::bail!("settings document must be a JSON object keyed by morph name");
        };

        let mut entries = Vec::new();
        let mut errors = Vec::new();
        for (name, value) in &map {
            match parse_entry(name, value) {
                Ok(settings) => entries.push(settings),
                Err(err) => errors.push(err),
            }
        }

        Ok(ParsedSettings { entries, errors })
    }

    /// Parses a settings document from a file.
    pub fn load(path: &Path) -> LoadResult<ParsedSettings> {
        Self::parse(&read_file(path)?)
    }
}

fn parse_entry(name: &str, value: &Value) -> Result<MorphSettings, SettingsError> {
    let Value::Object(fields) = value else {
        return Err(SettingsError::EntryNotAnObject {
            entry: name.to_owned(),
            found: json_kind(value),
        });
    };

    let mut settings = MorphSettings::new(name);
    for (field, field_value) in fields {
        match field.as_str() {
            "hostile" => {
                settings.hostile =
                    Some(field_value.as_bool().ok_or_else(|| SettingsError::FieldType {
                        entry: name.to_owned(),
                        field: field.clone(),
                        expected: "a boolean",
                    })?);
            }
            "attack" => {
                settings.attack = Some(
                    field_value
                        .as_str()
                        .ok_or_else(|| SettingsError::FieldType {
                            entry: name.to_owned(),
                            field: field.clone(),
                            expected: "an attack name string",
                        })?
                        .to_owned(),
                );
            }
            "abilities" => {
                settings.abilities = parse_ref_list(name, field, field_value)?;
            }
            "actions" => {
                settings.actions = parse_ref_list(name, field, field_value)?;
            }
            other => {
                tracing::warn!(
                    target: "morph::content",
                    entry = name,
                    field = other,
                    "ignoring unknown settings field"
                );
            }
        }
    }

    Ok(settings)
}

/// Parses a plugin list whose items are either a bare name string or an
/// object carrying `name` plus plugin-specific parameters.
fn parse_ref_list<const CAP: usize>(
    entry: &str,
    field: &str,
    value: &Value,
) -> Result<ArrayVec<PluginRef, CAP>, SettingsError> {
    let Value::Array(items) = value else {
        return Err(SettingsError::FieldType {
            entry: entry.to_owned(),
            field: field.to_owned(),
            expected: "a list",
        });
    };
    if items.len() > CAP {
        return Err(SettingsError::ListTooLong {
            entry: entry.to_owned(),
            field: field.to_owned(),
            limit: CAP,
        });
    }

    let mut refs = ArrayVec::new();
    for item in items {
        match item {
            Value::String(plugin_name) => refs.push(PluginRef::named(plugin_name.clone())),
            Value::Object(obj) => {
                let plugin_name = obj
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or_else(|| SettingsError::MissingName {
                        entry: entry.to_owned(),
                        field: field.to_owned(),
                    })?
                    .to_owned();

                let mut params = obj.clone();
                params.remove("name");
                let params = if params.is_empty() {
                    None
                } else {
                    Some(Value::Object(params))
                };
                refs.push(PluginRef {
                    name: plugin_name,
                    params,
                });
            }
            _ => {
                return Err(SettingsError::FieldType {
                    entry: entry.to_owned(),
                    field: format!("{field} item"),
                    expected: "a name string or an object with a 'name'",
                });
            }
        }
    }
    Ok(refs)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
