//! Domain error model.

use thiserror::Error;

/// Failure to build a domain value from untrusted input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier did not parse or was not positive.
    #[error("invalid {kind}: {reason}")]
    InvalidId { kind: &'static str, reason: String },
}

impl DomainError {
    pub fn invalid_id(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidId {
            kind,
            reason: reason.into(),
        }
    }
}
