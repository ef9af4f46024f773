//! Welcome screen.

use common::AppResult;
use domain::{Screen, LANDING_ACTION, LANDING_SUBTITLE, LANDING_TITLE};

use crate::navigation::Navigator;

/// Landing page with a single "Get Started" action.
#[derive(Debug, Default, Clone, Copy)]
pub struct LandingScreen;

impl LandingScreen {
    pub fn title(&self) -> &'static str {
        LANDING_TITLE
    }

    pub fn subtitle(&self) -> &'static str {
        LANDING_SUBTITLE
    }

    pub fn action_label(&self) -> &'static str {
        LANDING_ACTION
    }

    /// Move to the email authentication screen
    pub fn get_started(&self, navigator: &mut dyn Navigator) -> AppResult<()> {
        navigator.navigate(Screen::Auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationStack;

    #[test]
    fn test_get_started_opens_auth_screen() {
        let mut nav = NavigationStack::default();
        LandingScreen.get_started(&mut nav).unwrap();
        assert_eq!(nav.current(), Screen::Auth);
    }
}
