//! Screen shown once a sign-in link is on its way.

use domain::{MSG_LINK_SENT, MSG_LINK_SENT_TITLE};

#[derive(Debug, Default, Clone, Copy)]
pub struct VerificationScreen;

impl VerificationScreen {
    pub fn title(&self) -> &'static str {
        MSG_LINK_SENT_TITLE
    }

    pub fn message(&self) -> &'static str {
        MSG_LINK_SENT
    }
}
