//! Error types for morph resolution and capability updates.

/// Errors surfaced while resolving registry entries or driving a morph.
///
/// None of these are fatal to the host process; the worst consequence of
/// any of them is an actor losing its current morph.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MorphError {
    #[error("morph '{name}' is not registered")]
    UnknownIdentity { name: String },

    #[error("ability '{name}' is not registered")]
    UnknownAbility { name: String },

    #[error("action '{name}' is not registered")]
    UnknownAction { name: String },

    #[error("attack '{name}' is not registered")]
    UnknownAttack { name: String },

    #[error("morph '{name}' is blacklisted")]
    Blacklisted { name: String },

    #[error("morph '{name}' has not been acquired")]
    NotAcquired { name: String },
}

impl MorphError {
    pub fn unknown_identity(name: impl Into<String>) -> Self {
        Self::UnknownIdentity { name: name.into() }
    }

    pub fn unknown_ability(name: impl Into<String>) -> Self {
        Self::UnknownAbility { name: name.into() }
    }

    pub fn unknown_action(name: impl Into<String>) -> Self {
        Self::UnknownAction { name: name.into() }
    }

    pub fn unknown_attack(name: impl Into<String>) -> Self {
        Self::UnknownAttack { name: name.into() }
    }
}
