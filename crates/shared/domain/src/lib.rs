//! Domain layer - Core value objects for the email sign-in workflow.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared by the auth service and the app front end.

pub mod constants;
pub mod email;
pub mod error;
pub mod outcome;
pub mod screen;

pub use constants::*;
pub use email::EmailAddress;
pub use error::{DomainError, DomainResult};
pub use outcome::VerificationOutcome;
pub use screen::Screen;
