//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input rejected by a value object or identifier parser.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("User with ID '{0}' not found")]
    UserNotFound(String),

    /// Email uniqueness rule: another user already owns this address.
    #[error("Email '{0}' is already registered")]
    EmailTaken(String),

    #[error("Repository error: {0}")]
    Repo(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
