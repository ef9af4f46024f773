//! Unified error handling.
//!
//! Provides a single error type for configuration, Firebase REST calls and
//! navigation, with user-safe messages that hide internal details.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("{0}")]
    Validation(String),

    // Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    // External service errors
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("Service responded with {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    // Presentation
    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get error code for logs and client output
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            #[cfg(feature = "http")]
            AppError::Http(_) => "HTTP_ERROR",
            AppError::Service { .. } => "SERVICE_ERROR",
            AppError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            AppError::Navigation(_) => "NAVIGATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),

            // Hide details for internal/backend errors
            #[cfg(feature = "http")]
            AppError::Http(e) => {
                tracing::error!("HTTP error: {:?}", e);
                "A network error occurred".to_string()
            }
            AppError::Service { status, message } => {
                tracing::error!(status, "Service error: {}", message);
                "A backend service error occurred".to_string()
            }
            AppError::ServiceUnavailable(service) => {
                tracing::error!("Service unavailable: {}", service);
                "A backend service is unavailable".to_string()
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// External Error Conversion
// =============================================================================

// Request URLs are stripped so logged diagnostics carry no query secrets
#[cfg(feature = "http")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Http(err.without_url())
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidEmail => AppError::Validation("Invalid email address".to_string()),
            DomainError::UnknownScreen(name) => AppError::Navigation(format!("unknown screen {name}")),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn service(status: u16, message: impl Into<String>) -> Self {
        AppError::Service {
            status,
            message: message.into(),
        }
    }

    pub fn service_unavailable(service: impl Into<String>) -> Self {
        AppError::ServiceUnavailable(service.into())
    }

    pub fn navigation(msg: impl Into<String>) -> Self {
        AppError::Navigation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_hides_details_from_user() {
        let err = AppError::service(400, "INVALID_EMAIL");
        assert_eq!(err.code(), "SERVICE_ERROR");
        assert!(err.to_string().contains("INVALID_EMAIL"));
        assert!(!err.user_message().contains("INVALID_EMAIL"));
    }

    #[test]
    fn test_validation_message_is_shown() {
        let err = AppError::validation("FIREBASE_API_KEY must be set");
        assert_eq!(err.user_message(), "FIREBASE_API_KEY must be set");
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: AppError = DomainError::unknown_screen("Settings").into();
        assert!(matches!(err, AppError::Navigation(_)));

        let err: AppError = DomainError::InvalidEmail.into();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
