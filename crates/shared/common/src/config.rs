//! Shared configuration structures.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Default Firestore REST endpoint
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";

/// Default Identity Toolkit REST endpoint
pub const DEFAULT_IDENTITY_TOOLKIT_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

/// Default directory collection holding registered users
pub const DEFAULT_USERS_COLLECTION: &str = "users";

/// Default HTTP request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Firebase project access shared by the directory and issuer adapters.
#[derive(Clone, Deserialize, Serialize)]
pub struct FirebaseConfig {
    /// Web API key
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Firestore project identifier
    pub project_id: String,
    /// Collection holding user records
    pub users_collection: String,
    /// Firestore REST base URL (overridable for the emulator)
    pub firestore_base_url: Url,
    /// Identity Toolkit REST base URL (overridable for the emulator)
    pub identity_toolkit_base_url: Url,
}

// Don't expose the API key in debug output
impl fmt::Debug for FirebaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirebaseConfig")
            .field("api_key", &"[REDACTED]")
            .field("project_id", &self.project_id)
            .field("users_collection", &self.users_collection)
            .field("firestore_base_url", &self.firestore_base_url.as_str())
            .field(
                "identity_toolkit_base_url",
                &self.identity_toolkit_base_url.as_str(),
            )
            .finish()
    }
}

impl FirebaseConfig {
    /// Create a config pointing at the public Google endpoints.
    pub fn new(api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            project_id: project_id.into(),
            users_collection: DEFAULT_USERS_COLLECTION.to_string(),
            firestore_base_url: default_url(DEFAULT_FIRESTORE_BASE_URL),
            identity_toolkit_base_url: default_url(DEFAULT_IDENTITY_TOOLKIT_BASE_URL),
        }
    }

    /// Point both adapters at the same base URL (emulator or mock server).
    pub fn with_base_url(mut self, base: Url) -> Self {
        self.firestore_base_url = base.clone();
        self.identity_toolkit_base_url = base;
        self
    }
}

/// HTTP client settings for outbound REST calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: concat!("evote-auth/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

fn default_url(raw: &str) -> Url {
    Url::parse(raw).expect("built-in endpoint URL is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = FirebaseConfig::new("AIza-secret", "evote");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("AIza-secret"));
        assert!(debug.contains("evote"));
    }

    #[test]
    fn test_with_base_url_overrides_both_endpoints() {
        let base = Url::parse("http://127.0.0.1:9099").unwrap();
        let config = FirebaseConfig::new("k", "p").with_base_url(base.clone());
        assert_eq!(config.firestore_base_url, base);
        assert_eq!(config.identity_toolkit_base_url, base);
        assert_eq!(config.users_collection, "users");
    }
}
