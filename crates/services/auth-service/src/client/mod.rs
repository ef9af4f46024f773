//! Clients for the external Firebase services.
//!
//! Each collaborator is a capability trait so the workflow can be driven by
//! the real REST adapters or by test doubles.

mod directory_client;
mod link_client;

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;
use url::Url;

use common::{AppError, AppResult, HttpClientConfig};

pub use directory_client::{DirectoryLookup, FirestoreDirectory};
pub use link_client::{IdentityToolkitIssuer, LinkIssuer};

#[cfg(any(test, feature = "test-utils"))]
pub use directory_client::MockDirectoryLookup;
#[cfg(any(test, feature = "test-utils"))]
pub use link_client::MockLinkIssuer;

/// Request header carrying the Firebase Web API key; the key never goes in
/// a request URL.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Build the shared HTTP client used by both adapters.
pub fn build_http_client(config: &HttpClientConfig) -> AppResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(AppError::from)
}

/// Resolve a REST path against a configured base URL.
///
/// The base is treated as a directory, so a prefix such as
/// `http://localhost:8080/emulator` is kept in front of `path`.
fn endpoint(base: &Url, path: &str) -> AppResult<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    base.join(path)
        .map_err(|e| AppError::config(format!("invalid endpoint {base}{path}: {e}")))
}

/// Google API error envelope: `{"error": {"code": 400, "message": "..."}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Convert a non-success response into a service error, keeping the
/// service's own message when the body follows the Google error format.
async fn service_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string()
        });

    AppError::service(status.as_u16(), message)
}
