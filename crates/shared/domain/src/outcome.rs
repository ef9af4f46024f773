//! Verification outcome - the tagged result of one submission.

use std::fmt;

use serde::Serialize;

use crate::constants::{
    MSG_BUSY, MSG_INVALID_FORMAT, MSG_ISSUANCE_FAILED, MSG_LINK_SENT, MSG_LOOKUP_UNAVAILABLE,
    MSG_NOT_REGISTERED,
};

/// Result of submitting an email for verification.
///
/// Variants produced from a backend fault carry an operator-only
/// `diagnostic`. It is never part of [`VerificationOutcome::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// Input failed the email format rule; nothing was sent over the network
    InvalidFormat,

    /// Directory has no matching record.
    ///
    /// Under the default fault policy a failed lookup also lands here, with
    /// the fault kept in `diagnostic`.
    NotRegistered {
        #[serde(skip)]
        diagnostic: Option<String>,
    },

    /// Directory lookup failed and the fault policy surfaces it
    LookupUnavailable {
        #[serde(skip)]
        diagnostic: String,
    },

    /// Sign-in link was issued
    LinkSent,

    /// Lookup succeeded but the sign-in link could not be issued
    IssuanceFailed {
        #[serde(skip)]
        diagnostic: String,
    },

    /// Another submission on the same workflow is still outstanding
    Busy,
}

impl VerificationOutcome {
    /// Not registered, without any fault involved
    pub fn not_registered() -> Self {
        VerificationOutcome::NotRegistered { diagnostic: None }
    }

    /// Short, non-technical message for the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            VerificationOutcome::InvalidFormat => MSG_INVALID_FORMAT,
            VerificationOutcome::NotRegistered { .. } => MSG_NOT_REGISTERED,
            VerificationOutcome::LookupUnavailable { .. } => MSG_LOOKUP_UNAVAILABLE,
            VerificationOutcome::LinkSent => MSG_LINK_SENT,
            VerificationOutcome::IssuanceFailed { .. } => MSG_ISSUANCE_FAILED,
            VerificationOutcome::Busy => MSG_BUSY,
        }
    }

    /// Stable identifier for logs and machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            VerificationOutcome::InvalidFormat => "INVALID_FORMAT",
            VerificationOutcome::NotRegistered { .. } => "NOT_REGISTERED",
            VerificationOutcome::LookupUnavailable { .. } => "LOOKUP_UNAVAILABLE",
            VerificationOutcome::LinkSent => "LINK_SENT",
            VerificationOutcome::IssuanceFailed { .. } => "ISSUANCE_FAILED",
            VerificationOutcome::Busy => "BUSY",
        }
    }

    /// Operator-facing fault detail, if a backend call failed.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            VerificationOutcome::NotRegistered { diagnostic } => diagnostic.as_deref(),
            VerificationOutcome::LookupUnavailable { diagnostic }
            | VerificationOutcome::IssuanceFailed { diagnostic } => Some(diagnostic),
            _ => None,
        }
    }

    /// Check if the link was sent
    pub fn is_success(&self) -> bool {
        matches!(self, VerificationOutcome::LinkSent)
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}
