//! Email authentication screen.
//!
//! Holds the email input and the last error text, submits to the
//! verification workflow and turns the outcome into either an inline error
//! or a confirmation notice plus navigation.

use std::sync::Arc;

use tracing::{error, info};

use auth_service_lib::service::VerificationService;
use common::AppResult;
use domain::{
    Screen, VerificationOutcome, AUTH_PLACEHOLDER, AUTH_PROMPT, MSG_LINK_SENT, MSG_LINK_SENT_TITLE,
};

use crate::navigation::Navigator;
use crate::notify::Notifier;

pub struct EmailAuthScreen {
    workflow: Arc<dyn VerificationService>,
    email: String,
    error: Option<String>,
}

impl EmailAuthScreen {
    pub fn new(workflow: Arc<dyn VerificationService>) -> Self {
        Self {
            workflow,
            email: String::new(),
            error: None,
        }
    }

    pub fn prompt(&self) -> &'static str {
        AUTH_PROMPT
    }

    pub fn placeholder(&self) -> &'static str {
        AUTH_PLACEHOLDER
    }

    /// Replace the input with the latest text from the field
    pub fn handle_input(&mut self, text: impl Into<String>) {
        self.email = text.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Error text to show under the input, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the current input.
    ///
    /// On `LinkSent` shows the confirmation notice and navigates to the
    /// verification screen; any other outcome becomes the error text.
    ///
    /// # Errors
    /// Only navigation failures are returned; workflow faults are outcomes.
    pub async fn submit(
        &mut self,
        navigator: &mut dyn Navigator,
        notifier: &mut dyn Notifier,
    ) -> AppResult<VerificationOutcome> {
        self.error = None;

        let outcome = self.workflow.submit(&self.email).await;

        if let Some(diagnostic) = outcome.diagnostic() {
            error!(outcome = outcome.code(), "Verification backend fault: {}", diagnostic);
        }

        match &outcome {
            VerificationOutcome::LinkSent => {
                info!("Sign-in link sent");
                notifier.alert(MSG_LINK_SENT_TITLE, MSG_LINK_SENT);
                navigator.navigate(Screen::VerificationScreen)?;
            }
            other => {
                self.error = Some(other.user_message().to_string());
            }
        }

        Ok(outcome)
    }
}
