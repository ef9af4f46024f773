//! Screen identifiers used by the navigation host.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ROUTE_AUTH, ROUTE_LANDING, ROUTE_VERIFICATION};
use crate::error::DomainError;

/// Screens known to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    /// Welcome screen, the initial route
    LandingPage,
    /// Email entry and submission
    Auth,
    /// Shown after a sign-in link was sent
    VerificationScreen,
}

impl Screen {
    /// All screens, initial route first
    pub const ALL: [Screen; 3] = [Screen::LandingPage, Screen::Auth, Screen::VerificationScreen];

    /// Route name used by the navigation host
    pub fn route_name(&self) -> &'static str {
        match self {
            Screen::LandingPage => ROUTE_LANDING,
            Screen::Auth => ROUTE_AUTH,
            Screen::VerificationScreen => ROUTE_VERIFICATION,
        }
    }
}

impl FromStr for Screen {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROUTE_LANDING => Ok(Screen::LandingPage),
            ROUTE_AUTH => Ok(Screen::Auth),
            ROUTE_VERIFICATION => Ok(Screen::VerificationScreen),
            other => Err(DomainError::unknown_screen(other)),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}
