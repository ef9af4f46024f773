//! Line-oriented terminal front end.
//!
//! Renders the current screen, reads one line of input per step and drives
//! the screen controllers through the navigation stack.

use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing::{debug, error};

use auth_service_lib::service::VerificationService;
use common::AppResult;
use domain::{Screen, VerificationOutcome};

use crate::navigation::{NavigationStack, Navigator};
use crate::notify::WriterNotifier;
use crate::screens::{EmailAuthScreen, LandingScreen, VerificationScreen};

/// Interactive session over any line reader and writer.
pub struct TerminalApp<R: BufRead, W: Write> {
    input: R,
    output: W,
    navigator: NavigationStack,
    landing: LandingScreen,
    auth: EmailAuthScreen,
    verification: VerificationScreen,
}

impl<R: BufRead, W: Write> TerminalApp<R, W> {
    pub fn new(workflow: Arc<dyn VerificationService>, input: R, output: W) -> Self {
        Self {
            input,
            output,
            navigator: NavigationStack::default(),
            landing: LandingScreen,
            auth: EmailAuthScreen::new(workflow),
            verification: VerificationScreen,
        }
    }

    /// Run until the verification screen is reached or input ends.
    ///
    /// Returns the screen the session ended on.
    pub async fn run(&mut self) -> AppResult<Screen> {
        loop {
            match self.navigator.current() {
                Screen::LandingPage => {
                    writeln!(self.output, "{}", self.landing.title())?;
                    writeln!(self.output, "{}", self.landing.subtitle())?;
                    write!(self.output, "[Press Enter to {}] ", self.landing.action_label())?;
                    self.output.flush()?;

                    if self.read_line()?.is_none() {
                        break;
                    }
                    self.landing.get_started(&mut self.navigator)?;
                }
                Screen::Auth => {
                    write!(
                        self.output,
                        "{} ({}): ",
                        self.auth.prompt(),
                        self.auth.placeholder()
                    )?;
                    self.output.flush()?;

                    let Some(line) = self.read_line()? else {
                        break;
                    };
                    self.auth.handle_input(line);

                    let mut notifier = WriterNotifier::new(&mut self.output);
                    self.auth
                        .submit(&mut self.navigator, &mut notifier)
                        .await?;

                    if let Some(message) = self.auth.error() {
                        writeln!(self.output, "{message}")?;
                    }
                }
                Screen::VerificationScreen => {
                    writeln!(self.output, "{}", self.verification.title())?;
                    writeln!(self.output, "{}", self.verification.message())?;
                    break;
                }
            }
        }

        debug!(screen = %self.navigator.current(), "Session ended");
        Ok(self.navigator.current())
    }

    /// Read one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Submit a single address and print the user message.
///
/// Returns the outcome so the caller can choose an exit status.
pub async fn verify_once<W: Write>(
    workflow: &dyn VerificationService,
    email: &str,
    output: &mut W,
) -> AppResult<VerificationOutcome> {
    let outcome = workflow.submit(email).await;

    if let Some(diagnostic) = outcome.diagnostic() {
        error!(outcome = outcome.code(), "Verification backend fault: {}", diagnostic);
    }

    writeln!(output, "{}", outcome.user_message())?;
    Ok(outcome)
}
