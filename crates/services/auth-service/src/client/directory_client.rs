//! Directory lookup against Cloud Firestore.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use common::{AppResult, FirebaseConfig};
use domain::EmailAddress;

use super::{endpoint, service_error, API_KEY_HEADER};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Existence check for registered users, keyed by email.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DirectoryLookup: Send + Sync {
    /// Check whether a user record with this email exists
    async fn exists(&self, email: &EmailAddress) -> AppResult<bool>;
}

/// Firestore REST implementation of [`DirectoryLookup`].
///
/// Runs a structured query `email == <address>` with `limit 1` on the
/// configured users collection.
pub struct FirestoreDirectory {
    http: Client,
    config: FirebaseConfig,
}

impl FirestoreDirectory {
    /// Create new directory client
    pub fn new(http: Client, config: FirebaseConfig) -> Self {
        Self { http, config }
    }

    fn run_query_path(&self) -> String {
        format!(
            "v1/projects/{}/databases/(default)/documents:runQuery",
            self.config.project_id
        )
    }
}

// =============================================================================
// Firestore wire types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunQueryRequest<'a> {
    structured_query: StructuredQuery<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StructuredQuery<'a> {
    from: [CollectionSelector<'a>; 1],
    #[serde(rename = "where")]
    filter: Filter<'a>,
    limit: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionSelector<'a> {
    collection_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Filter<'a> {
    field_filter: FieldFilter<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldFilter<'a> {
    field: FieldReference,
    op: &'static str,
    value: StringValue<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldReference {
    field_path: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StringValue<'a> {
    string_value: &'a str,
}

/// One element of the streamed `runQuery` response. Elements without a
/// `document` only report progress (`readTime`, `skippedResults`).
#[derive(Debug, Deserialize)]
struct RunQueryResponseItem {
    #[serde(default)]
    document: Option<serde_json::Value>,
}

impl<'a> RunQueryRequest<'a> {
    fn email_equals(collection_id: &'a str, email: &'a str) -> Self {
        Self {
            structured_query: StructuredQuery {
                from: [CollectionSelector { collection_id }],
                filter: Filter {
                    field_filter: FieldFilter {
                        field: FieldReference { field_path: "email" },
                        op: "EQUAL",
                        value: StringValue {
                            string_value: email,
                        },
                    },
                },
                limit: 1,
            },
        }
    }
}

#[async_trait]
impl DirectoryLookup for FirestoreDirectory {
    async fn exists(&self, email: &EmailAddress) -> AppResult<bool> {
        let url = endpoint(&self.config.firestore_base_url, &self.run_query_path())?;
        let body = RunQueryRequest::email_equals(&self.config.users_collection, email.as_str());

        debug!(collection = %self.config.users_collection, "Querying user directory");

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(service_error(response).await);
        }

        let items: Vec<RunQueryResponseItem> = response.json().await?;
        Ok(items.iter().any(|item| item.document.is_some()))
    }
}
