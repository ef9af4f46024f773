//! Email address value object.
//!
//! The address is validated once at construction and then carried verbatim:
//! no case folding and no trimming, so collaborators see exactly what the
//! user typed.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::EMAIL_PATTERN;
use crate::error::{DomainError, DomainResult};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse user input into an email address.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidEmail`] if the input does not match
    /// the format rule.
    pub fn parse(input: impl Into<String>) -> DomainResult<Self> {
        let input = input.into();
        if Self::is_valid(&input) {
            Ok(Self(input))
        } else {
            Err(DomainError::InvalidEmail)
        }
    }

    /// Pure format check, no allocation.
    pub fn is_valid(input: &str) -> bool {
        EMAIL_RE.is_match(input)
    }

    /// Get the address as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}
