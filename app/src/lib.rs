//! eVoting sign-in app.
//!
//! Presentation layer for the email verification workflow:
//!
//! - **navigation**: stack navigator over named screens
//! - **screens**: landing, email authentication and verification screens
//! - **notify**: user notices
//! - **terminal**: line-oriented front end driving the screens
//! - **cli**: command-line interface

pub mod cli;
pub mod navigation;
pub mod notify;
pub mod screens;
pub mod terminal;

pub use navigation::{NavigationStack, Navigator};
pub use terminal::{verify_once, TerminalApp};
