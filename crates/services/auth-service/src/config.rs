//! Auth service configuration.

use std::env;

use url::Url;

use crate::service::{LookupFaultPolicy, WorkflowConfig};
use common::{
    AppError, AppResult, FirebaseConfig, HttpClientConfig, DEFAULT_FIRESTORE_BASE_URL,
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_IDENTITY_TOOLKIT_BASE_URL, DEFAULT_USERS_COLLECTION,
};

/// Auth service configuration.
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Firebase project access
    pub firebase: FirebaseConfig,
    /// Outbound HTTP settings
    pub http: HttpClientConfig,
    /// Workflow settings (redirect target, fault policy)
    pub workflow: WorkflowConfig,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns a configuration error if a required variable is missing or a
    /// value cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        let api_key = required("FIREBASE_API_KEY")?;
        let project_id = required("FIREBASE_PROJECT_ID")?;
        let redirect_url = parse_url("AUTH_REDIRECT_URL", &required("AUTH_REDIRECT_URL")?)?;

        let firebase = FirebaseConfig {
            api_key,
            project_id,
            users_collection: env::var("FIRESTORE_USERS_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_USERS_COLLECTION.to_string()),
            firestore_base_url: parse_url(
                "FIRESTORE_BASE_URL",
                &env::var("FIRESTORE_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_FIRESTORE_BASE_URL.to_string()),
            )?,
            identity_toolkit_base_url: parse_url(
                "IDENTITY_TOOLKIT_BASE_URL",
                &env::var("IDENTITY_TOOLKIT_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_IDENTITY_TOOLKIT_BASE_URL.to_string()),
            )?,
        };

        let http = HttpClientConfig {
            timeout_secs: match env::var("HTTP_TIMEOUT_SECS") {
                Ok(raw) => raw.parse().map_err(|_| {
                    AppError::config(format!("HTTP_TIMEOUT_SECS must be a number, got '{raw}'"))
                })?,
                Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
            },
            ..HttpClientConfig::default()
        };

        let lookup_fault_policy = match env::var("LOOKUP_FAULT_POLICY") {
            Ok(raw) => raw.parse()?,
            Err(_) => LookupFaultPolicy::default(),
        };

        Ok(Self {
            firebase,
            http,
            workflow: WorkflowConfig::new(redirect_url)
                .with_lookup_fault_policy(lookup_fault_policy),
        })
    }
}

fn required(name: &str) -> AppResult<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::config(format!("{name} must be set"))),
    }
}

fn parse_url(name: &str, raw: &str) -> AppResult<Url> {
    Url::parse(raw).map_err(|e| AppError::config(format!("{name} is not a valid URL: {e}")))
}
