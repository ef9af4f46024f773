//! Domain-level constants.
//!
//! These constants define the email format rule, route names and the
//! user-facing copy shown for each verification outcome.

// =============================================================================
// Email Format
// =============================================================================

/// Accepted university email shape: local-part "@" domain "." TLD.
///
/// Matched case-insensitively against the whole input.
pub const EMAIL_PATTERN: &str = r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$";

// =============================================================================
// Navigation
// =============================================================================

/// Route name of the welcome screen (initial route)
pub const ROUTE_LANDING: &str = "LandingPage";

/// Route name of the email authentication screen
pub const ROUTE_AUTH: &str = "Auth";

/// Route name of the screen shown after a link was sent
pub const ROUTE_VERIFICATION: &str = "VerificationScreen";

// =============================================================================
// User-facing Messages
// =============================================================================

/// Shown when the input does not look like an email address
pub const MSG_INVALID_FORMAT: &str = "Please enter a valid university email address.";

/// Shown when the directory has no matching record
pub const MSG_NOT_REGISTERED: &str = "Email address not found. Please sign up first.";

/// Shown when the directory could not be queried
pub const MSG_LOOKUP_UNAVAILABLE: &str =
    "We could not reach the user directory. Please try again later.";

/// Shown when the sign-in link could not be issued
pub const MSG_ISSUANCE_FAILED: &str = "Error sending verification link. Please try again later.";

/// Shown when a submission is rejected because another one is outstanding
pub const MSG_BUSY: &str = "A verification request is already in progress. Please wait.";

/// Title of the confirmation notice after a link was sent
pub const MSG_LINK_SENT_TITLE: &str = "Verification Sent";

/// Body of the confirmation notice after a link was sent
pub const MSG_LINK_SENT: &str = "Verification link sent to your email. Please check your inbox.";

// =============================================================================
// Landing Copy
// =============================================================================

/// Landing screen title
pub const LANDING_TITLE: &str = "Welcome to decentralised eVoting System";

/// Landing screen subtitle
pub const LANDING_SUBTITLE: &str = "Authenticate with your university email";

/// Landing screen call to action
pub const LANDING_ACTION: &str = "Get Started";

/// Email screen prompt
pub const AUTH_PROMPT: &str = "Enter your university email";

/// Email input placeholder
pub const AUTH_PLACEHOLDER: &str = "example@university.edu";
