//! Domain-level errors.
//!
//! These errors represent business rule violations.
//! They are independent of infrastructure concerns (HTTP, Firebase).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input does not satisfy the email format rule
    #[error("Invalid email address")]
    InvalidEmail,

    /// Route name is not one of the known screens
    #[error("Unknown screen: {0}")]
    UnknownScreen(String),
}

impl DomainError {
    /// Create an unknown screen error
    pub fn unknown_screen(name: impl Into<String>) -> Self {
        DomainError::UnknownScreen(name.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
