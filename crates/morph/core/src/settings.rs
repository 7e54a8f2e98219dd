//! Mergeable per-kind morph configuration.
//!
//! A [`MorphSettings`] value describes one named morph kind: its hostility
//! flag, its on-hit attack effect, and the ability/action plugins it grants.
//! Settings from multiple sources (bundled defaults, then user overrides)
//! are combined with [`MorphSettings::merge`], which is field-level so an
//! override file can tweak one ability without restating the whole list.

use arrayvec::ArrayVec;

use crate::config::MorphConfig;

/// Named reference to a registered plugin, with optional plugin-specific
/// parameters carried from the settings source.
#[derive(Clone, Debug, PartialEq)]
pub struct PluginRef {
    pub name: String,
    /// Extra keys from the source entry, e.g. `{"power": 2}` for a jump
    /// ability. Interpretation is up to the plugin.
    pub params: Option<serde_json::Value>,
}

impl PluginRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: None,
        }
    }

    pub fn with_params(name: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            params: Some(params),
        }
    }

    /// Reads an integer parameter, if present.
    pub fn param_u64(&self, key: &str) -> Option<u64> {
        self.params.as_ref()?.get(key)?.as_u64()
    }

    /// Reads a float parameter, if present.
    pub fn param_f64(&self, key: &str) -> Option<f64> {
        self.params.as_ref()?.get(key)?.as_f64()
    }
}

/// Configuration of one morph kind.
///
/// Scalar fields are `Option` so merging can tell "explicitly set by this
/// source" apart from "absent"; an absent field never clobbers a value an
/// earlier source provided.
#[derive(Clone, Debug, PartialEq)]
pub struct MorphSettings {
    /// Registry key; globally unique within a registry.
    pub name: String,
    pub hostile: Option<bool>,
    /// Key into the registered attack effects.
    pub attack: Option<String>,
    pub abilities: ArrayVec<PluginRef, { MorphConfig::MAX_ABILITIES }>,
    pub actions: ArrayVec<PluginRef, { MorphConfig::MAX_ACTIONS }>,
}

impl MorphSettings {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hostile: None,
            attack: None,
            abilities: ArrayVec::new(),
            actions: ArrayVec::new(),
        }
    }

    /// Effective hostility; kinds default to non-hostile.
    pub fn is_hostile(&self) -> bool {
        self.hostile.unwrap_or(false)
    }

    /// Merges a later-loaded source's settings into this entry.
    ///
    /// Scalars: the incoming value wins only if explicitly present.
    /// Lists: union by name; this entry's relative order is preserved,
    /// names new in `incoming` append at the end, and duplicates keep the
    /// earlier occurrence. The operation is associative, so layering
    /// sources A, B, C one at a time equals layering A with B+C.
    pub fn merge(&mut self, incoming: &MorphSettings) {
        if let Some(hostile) = incoming.hostile {
            self.hostile = Some(hostile);
        }
        if let Some(attack) = &incoming.attack {
            self.attack = Some(attack.clone());
        }

        union_refs(&mut self.abilities, &incoming.abilities);
        union_refs(&mut self.actions, &incoming.actions);
    }
}

/// Appends entries of `incoming` whose names are not already present.
fn union_refs<const CAP: usize>(
    existing: &mut ArrayVec<PluginRef, CAP>,
    incoming: &[PluginRef],
) {
    for slot in incoming {
        if existing.iter().any(|have| have.name == slot.name) {
            continue;
        }
        if existing.try_push(slot.clone()).is_err() {
            tracing::warn!(
                target: "morph::settings",
                slot = %slot.name,
                limit = CAP,
                "plugin list full, dropping merged entry"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(
        name: &str,
        hostile: Option<bool>,
        attack: Option<&str>,
        abilities: &[&str],
        actions: &[&str],
    ) -> MorphSettings {
        let mut s = MorphSettings::new(name);
        s.hostile = hostile;
        s.attack = attack.map(str::to_owned);
        for ability in abilities {
            s.abilities.push(PluginRef::named(*ability));
        }
        for action in actions {
            s.actions.push(PluginRef::named(*action));
        }
        s
    }

    fn merged(mut a: MorphSettings, b: &MorphSettings) -> MorphSettings {
        a.merge(b);
        a
    }

    #[test]
    fn later_scalar_wins_only_if_present() {
        let a = settings("wolf", Some(false), Some("poison"), &[], &[]);
        let b = settings("wolf", Some(true), None, &[], &[]);

        let out = merged(a, &b);
        assert_eq!(out.hostile, Some(true));
        // attack was absent in b, so a's value survives
        assert_eq!(out.attack.as_deref(), Some("poison"));
    }

    #[test]
    fn merge_never_drops_fields_absent_in_incoming() {
        let a = settings("wolf", Some(true), Some("wither"), &["swim"], &["jump"]);
        let b = settings("wolf", None, None, &[], &[]);

        let out = merged(a.clone(), &b);
        assert_eq!(out, a);
    }

    #[test]
    fn list_union_preserves_order_and_appends() {
        let a = settings("wolf", None, None, &["x", "y"], &[]);
        let b = settings("wolf", None, None, &["y", "z"], &[]);

        let out = merged(a, &b);
        let names: Vec<&str> = out.abilities.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["x", "y", "z"]);
    }

    #[test]
    fn duplicate_names_keep_earlier_occurrence() {
        let a = settings("wolf", None, None, &[], &[]);
        let mut b = settings("wolf", None, None, &[], &[]);
        b.abilities
            .push(PluginRef::with_params("jumping", serde_json::json!({"power": 2})));

        let mut first = merged(a, &b);
        // a second source restating "jumping" without params must not
        // replace the earlier parameterized occurrence
        let c = settings("wolf", None, None, &["jumping"], &[]);
        first.merge(&c);

        assert_eq!(first.abilities.len(), 1);
        assert_eq!(first.abilities[0].param_u64("power"), Some(2));
    }

    #[test]
    fn merge_is_associative() {
        let a = settings("wolf", Some(false), None, &["swim"], &["jump"]);
        let b = settings("wolf", Some(true), Some("poison"), &["jumping"], &[]);
        let c = settings("wolf", None, Some("knockback"), &["swim", "glide"], &["howl"]);

        let left = merged(merged(a.clone(), &b), &c);
        let right = merged(a, &merged(b.clone(), &c));

        assert_eq!(left, right);
    }
}
