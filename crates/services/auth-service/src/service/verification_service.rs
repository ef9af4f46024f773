//! Verification workflow - validates an email, checks the directory and
//! issues a sign-in link.
//!
//! Every backend fault is converted into a [`VerificationOutcome`]; nothing
//! propagates past `submit`. User notification and error-level logging of
//! diagnostics are left to the caller.

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::client::{DirectoryLookup, LinkIssuer};
use common::AppError;
use domain::{EmailAddress, VerificationOutcome};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// How a failed directory lookup is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupFaultPolicy {
    /// Coalesce lookup faults with "no such user" (`NotRegistered`)
    #[default]
    NotFound,
    /// Report lookup faults as `LookupUnavailable`
    Surface,
}

impl FromStr for LookupFaultPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not-found" | "not_found" | "notfound" => Ok(LookupFaultPolicy::NotFound),
            "surface" => Ok(LookupFaultPolicy::Surface),
            other => Err(AppError::config(format!(
                "unknown lookup fault policy '{other}' (expected 'not-found' or 'surface')"
            ))),
        }
    }
}

/// Workflow settings injected at construction.
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Deep link embedded in issued sign-in links
    pub redirect_url: Url,
    /// Treatment of directory lookup faults
    pub lookup_fault_policy: LookupFaultPolicy,
}

impl WorkflowConfig {
    /// Config with the default fault policy
    pub fn new(redirect_url: Url) -> Self {
        Self {
            redirect_url,
            lookup_fault_policy: LookupFaultPolicy::default(),
        }
    }

    /// Override the lookup fault policy
    pub fn with_lookup_fault_policy(mut self, policy: LookupFaultPolicy) -> Self {
        self.lookup_fault_policy = policy;
        self
    }
}

/// Submission state token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    InFlight,
}

/// Verification service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait VerificationService: Send + Sync {
    /// Submit an email for verification and sign-in link issuance
    async fn submit(&self, email: &str) -> VerificationOutcome;
}

/// Concrete implementation of VerificationService over the two collaborators.
pub struct VerificationWorkflow {
    directory: Arc<dyn DirectoryLookup>,
    issuer: Arc<dyn LinkIssuer>,
    config: WorkflowConfig,
    in_flight: AtomicBool,
}

/// Returns the workflow to `Idle` when the submission ends, including when
/// its future is dropped mid-call.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl VerificationWorkflow {
    /// Create new workflow instance
    pub fn new(
        directory: Arc<dyn DirectoryLookup>,
        issuer: Arc<dyn LinkIssuer>,
        config: WorkflowConfig,
    ) -> Self {
        Self {
            directory,
            issuer,
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Current submission state
    pub fn state(&self) -> WorkflowState {
        if self.in_flight.load(Ordering::Acquire) {
            WorkflowState::InFlight
        } else {
            WorkflowState::Idle
        }
    }

    /// Injected configuration
    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                flag: &self.in_flight,
            })
    }

    fn lookup_fault(&self, err: AppError) -> VerificationOutcome {
        let diagnostic = format!("directory lookup failed: {err}");
        match self.config.lookup_fault_policy {
            LookupFaultPolicy::NotFound => VerificationOutcome::NotRegistered {
                diagnostic: Some(diagnostic),
            },
            LookupFaultPolicy::Surface => VerificationOutcome::LookupUnavailable { diagnostic },
        }
    }
}

#[async_trait]
impl VerificationService for VerificationWorkflow {
    async fn submit(&self, email: &str) -> VerificationOutcome {
        let Some(_guard) = self.try_begin() else {
            debug!("Submission rejected: another one is in flight");
            return VerificationOutcome::Busy;
        };

        // Validating
        let email = match EmailAddress::parse(email) {
            Ok(email) => email,
            Err(_) => {
                debug!("Submission rejected: invalid email format");
                return VerificationOutcome::InvalidFormat;
            }
        };

        // LookingUp
        debug!(email = %email, "Looking up email in directory");
        match self.directory.exists(&email).await {
            Ok(true) => {}
            Ok(false) => {
                debug!(email = %email, "Email not registered");
                return VerificationOutcome::not_registered();
            }
            Err(err) => return self.lookup_fault(err),
        }

        // Issuing
        debug!(email = %email, "Issuing sign-in link");
        match self
            .issuer
            .send_sign_in_link(&email, &self.config.redirect_url)
            .await
        {
            Ok(()) => VerificationOutcome::LinkSent,
            Err(err) => VerificationOutcome::IssuanceFailed {
                diagnostic: format!("sign-in link issuance failed: {err}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MockDirectoryLookup, MockLinkIssuer};

    fn redirect() -> Url {
        Url::parse("https://evote.example.edu/finish-sign-in").unwrap()
    }

    fn workflow(directory: MockDirectoryLookup, issuer: MockLinkIssuer) -> VerificationWorkflow {
        VerificationWorkflow::new(
            Arc::new(directory),
            Arc::new(issuer),
            WorkflowConfig::new(redirect()),
        )
    }

    #[tokio::test]
    async fn test_invalid_format_makes_no_calls() {
        let mut directory = MockDirectoryLookup::new();
        directory.expect_exists().never();
        let mut issuer = MockLinkIssuer::new();
        issuer.expect_send_sign_in_link().never();

        let outcome = workflow(directory, issuer).submit("not-an-email").await;

        assert_eq!(outcome, VerificationOutcome::InvalidFormat);
    }

    #[tokio::test]
    async fn test_not_registered_skips_issuance() {
        let mut directory = MockDirectoryLookup::new();
        directory
            .expect_exists()
            .withf(|email| email.as_str() == "student@uni.edu")
            .times(1)
            .returning(|_| Ok(false));
        let mut issuer = MockLinkIssuer::new();
        issuer.expect_send_sign_in_link().never();

        let outcome = workflow(directory, issuer).submit("student@uni.edu").await;

        assert_eq!(outcome, VerificationOutcome::not_registered());
    }

    #[tokio::test]
    async fn test_registered_mixed_case_sends_link_verbatim() {
        let mut directory = MockDirectoryLookup::new();
        directory.expect_exists().times(1).returning(|_| Ok(true));
        let mut issuer = MockLinkIssuer::new();
        issuer
            .expect_send_sign_in_link()
            .withf(|email, url| {
                email.as_str() == "STUDENT@UNI.EDU"
                    && url.as_str() == "https://evote.example.edu/finish-sign-in"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = workflow(directory, issuer).submit("STUDENT@UNI.EDU").await;

        assert_eq!(outcome, VerificationOutcome::LinkSent);
    }

    #[tokio::test]
    async fn test_lookup_fault_coalesces_to_not_registered() {
        let mut directory = MockDirectoryLookup::new();
        directory
            .expect_exists()
            .times(1)
            .returning(|_| Err(AppError::service_unavailable("firestore")));
        let mut issuer = MockLinkIssuer::new();
        issuer.expect_send_sign_in_link().never();

        let outcome = workflow(directory, issuer).submit("student@uni.edu").await;

        assert!(matches!(
            outcome,
            VerificationOutcome::NotRegistered { diagnostic: Some(ref d) } if d.contains("firestore")
        ));
        assert_eq!(outcome.user_message(), domain::MSG_NOT_REGISTERED);
    }

    #[tokio::test]
    async fn test_lookup_fault_surfaced_when_configured() {
        let mut directory = MockDirectoryLookup::new();
        directory
            .expect_exists()
            .returning(|_| Err(AppError::service(503, "UNAVAILABLE")));
        let mut issuer = MockLinkIssuer::new();
        issuer.expect_send_sign_in_link().never();

        let workflow = VerificationWorkflow::new(
            Arc::new(directory),
            Arc::new(issuer),
            WorkflowConfig::new(redirect()).with_lookup_fault_policy(LookupFaultPolicy::Surface),
        );
        assert_eq!(
            workflow.config().lookup_fault_policy,
            LookupFaultPolicy::Surface
        );
        let outcome = workflow.submit("student@uni.edu").await;

        assert!(matches!(outcome, VerificationOutcome::LookupUnavailable { .. }));
        assert!(!outcome.user_message().contains("UNAVAILABLE"));
    }

    #[tokio::test]
    async fn test_issuance_fault_returns_generic_message() {
        let mut directory = MockDirectoryLookup::new();
        directory.expect_exists().returning(|_| Ok(true));
        let mut issuer = MockLinkIssuer::new();
        issuer
            .expect_send_sign_in_link()
            .times(1)
            .returning(|_, _| Err(AppError::service(400, "QUOTA_EXCEEDED: raw backend detail")));

        let outcome = workflow(directory, issuer).submit("student@uni.edu").await;

        assert!(matches!(outcome, VerificationOutcome::IssuanceFailed { .. }));
        assert_eq!(outcome.user_message(), domain::MSG_ISSUANCE_FAILED);
        assert!(!outcome.user_message().contains("QUOTA_EXCEEDED"));
        assert!(outcome.diagnostic().unwrap().contains("QUOTA_EXCEEDED"));
    }

    #[tokio::test]
    async fn test_state_returns_to_idle_after_submission() {
        let mut directory = MockDirectoryLookup::new();
        directory.expect_exists().returning(|_| Ok(false));
        let issuer = MockLinkIssuer::new();

        let workflow = workflow(directory, issuer);
        assert_eq!(workflow.state(), WorkflowState::Idle);
        workflow.submit("student@uni.edu").await;
        assert_eq!(workflow.state(), WorkflowState::Idle);
    }

    #[test]
    fn test_parse_lookup_fault_policy() {
        assert_eq!(
            "not-found".parse::<LookupFaultPolicy>().unwrap(),
            LookupFaultPolicy::NotFound
        );
        assert_eq!(
            " Surface ".parse::<LookupFaultPolicy>().unwrap(),
            LookupFaultPolicy::Surface
        );
        assert!("retry".parse::<LookupFaultPolicy>().is_err());
    }
}
