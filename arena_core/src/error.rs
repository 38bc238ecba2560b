//! Combat errors

use thiserror::Error;

/// Errors raised while mutating characters or resolving battles
///
/// Expected absence (no matching ability, no potion in the inventory) is not
/// an error; those lookups return `Option`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombatError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("battle exceeded the limit of {limit} turns without a winner")]
    TurnLimitExceeded { limit: u32 },
}

impl CombatError {
    /// Shorthand for building an `InvalidArgument`
    pub fn invalid(message: impl Into<String>) -> Self {
        CombatError::InvalidArgument(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CombatError::InvalidArgument(_))
    }
}
