//! Rejection and input errors raised by the rules engine.
//!
//! Every variant is recoverable: a rejected operation leaves the caller's grid
//! and piece untouched.

use thiserror::Error;

use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Malformed cell data was handed to a validator. This is a caller bug,
    /// not a game event.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: &'static str },

    /// The shift is illegal. For `Down` the caller treats this as a landing.
    #[error("move {direction:?} rejected")]
    MoveRejected { direction: Direction },

    /// No kick offset produced a legal position.
    #[error("rotation rejected: every kick offset collides")]
    RotationRejected,
}

impl RulesError {
    pub(crate) fn invalid(reason: &'static str) -> Self {
        RulesError::InvalidInput { reason }
    }

    pub fn is_rejection(&self) -> bool {
        !matches!(self, RulesError::InvalidInput { .. })
    }
}
