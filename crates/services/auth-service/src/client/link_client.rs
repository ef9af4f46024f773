//! Sign-in link issuance through the Identity Toolkit REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;
use url::Url;

use common::{AppResult, FirebaseConfig};
use domain::EmailAddress;

use super::{endpoint, service_error, API_KEY_HEADER};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const SEND_OOB_CODE_PATH: &str = "v1/accounts:sendOobCode";

/// Issues passwordless sign-in links.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LinkIssuer: Send + Sync {
    /// Email a one-time sign-in link that resumes the app at `redirect_url`
    async fn send_sign_in_link(&self, email: &EmailAddress, redirect_url: &Url) -> AppResult<()>;
}

/// Identity Toolkit implementation of [`LinkIssuer`] (`EMAIL_SIGNIN` OOB code).
pub struct IdentityToolkitIssuer {
    http: Client,
    config: FirebaseConfig,
}

impl IdentityToolkitIssuer {
    /// Create new issuer client
    pub fn new(http: Client, config: FirebaseConfig) -> Self {
        Self { http, config }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendOobCodeRequest<'a> {
    request_type: &'static str,
    email: &'a str,
    continue_url: &'a str,
    can_handle_code_in_app: bool,
}

#[async_trait]
impl LinkIssuer for IdentityToolkitIssuer {
    async fn send_sign_in_link(&self, email: &EmailAddress, redirect_url: &Url) -> AppResult<()> {
        let url = endpoint(&self.config.identity_toolkit_base_url, SEND_OOB_CODE_PATH)?;
        let body = SendOobCodeRequest {
            request_type: "EMAIL_SIGNIN",
            email: email.as_str(),
            continue_url: redirect_url.as_str(),
            can_handle_code_in_app: true,
        };

        debug!(continue_url = %redirect_url, "Requesting sign-in link");

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

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn issuer_for(server: &MockServer) -> IdentityToolkitIssuer {
        let base = Url::parse(&server.uri()).unwrap();
        let config = FirebaseConfig::new("test-key", "evote").with_base_url(base);
        IdentityToolkitIssuer::new(Client::new(), config)
    }

    fn redirect() -> Url {
        Url::parse("https://evote.example.edu/finish-sign-in").unwrap()
    }

    #[tokio::test]
    async fn test_sends_email_signin_request_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:sendOobCode"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_json(json!({
                "requestType": "EMAIL_SIGNIN",
                "email": "STUDENT@UNI.EDU",
                "continueUrl": "https://evote.example.edu/finish-sign-in",
                "canHandleCodeInApp": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "identitytoolkit#GetOobConfirmationCodeResponse",
                "email": "STUDENT@UNI.EDU"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let email = EmailAddress::parse("STUDENT@UNI.EDU").unwrap();
        issuer_for(&server)
            .send_sign_in_link(&email, &redirect())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_rejected_request_is_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:sendOobCode"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "code": 400, "message": "INVALID_EMAIL", "errors": [] }
            })))
            .mount(&server)
            .await;

        let email = EmailAddress::parse("student@uni.edu").unwrap();
        let err = issuer_for(&server)
            .send_sign_in_link(&email, &redirect())
            .await
            .unwrap_err();

        match err {
            AppError::Service { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "INVALID_EMAIL");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_uses_status_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:sendOobCode"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let email = EmailAddress::parse("student@uni.edu").unwrap();
        let err = issuer_for(&server)
            .send_sign_in_link(&email, &redirect())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Service { status: 503, ref message } if message == "Service Unavailable"
        ));
    }
}
