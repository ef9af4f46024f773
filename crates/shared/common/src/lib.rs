//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling with user-safe messages
//! - Configuration structures for the Firebase adapters

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
