//! Navigation host - a stack of named screens.

use tracing::debug;

use common::{AppError, AppResult};
use domain::Screen;

/// Moves between screens on command.
pub trait Navigator {
    /// Push a screen onto the stack
    fn navigate(&mut self, screen: Screen) -> AppResult<()>;

    /// Pop the current screen; returns false when already at the root
    fn go_back(&mut self) -> bool;

    /// Screen currently shown
    fn current(&self) -> Screen;

    /// Navigate by route name
    fn navigate_to(&mut self, route_name: &str) -> AppResult<()> {
        let screen = route_name.parse::<Screen>()?;
        self.navigate(screen)
    }
}

/// Stack navigator with a fixed set of registered screens.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    registered: Vec<Screen>,
    stack: Vec<Screen>,
}

impl NavigationStack {
    /// Create a stack starting at `initial`.
    ///
    /// The initial screen is always registered.
    pub fn new(initial: Screen, registered: impl IntoIterator<Item = Screen>) -> Self {
        let mut routes: Vec<Screen> = registered.into_iter().collect();
        if !routes.contains(&initial) {
            routes.insert(0, initial);
        }
        Self {
            registered: routes,
            stack: vec![initial],
        }
    }

    /// Screens from root to current
    pub fn history(&self) -> &[Screen] {
        &self.stack
    }

    /// Check if a screen can be navigated to
    pub fn is_registered(&self, screen: Screen) -> bool {
        self.registered.contains(&screen)
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Screen::LandingPage, Screen::ALL)
    }
}

impl Navigator for NavigationStack {
    fn navigate(&mut self, screen: Screen) -> AppResult<()> {
        if !self.is_registered(screen) {
            return Err(AppError::navigation(format!(
                "screen {screen} is not registered"
            )));
        }
        debug!(from = %self.current(), to = %screen, "Navigating");
        self.stack.push(screen);
        Ok(())
    }

    fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    fn current(&self) -> Screen {
        // The root is never popped.
        self.stack.last().copied().unwrap_or(Screen::LandingPage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_landing_page() {
        let nav = NavigationStack::default();
        assert_eq!(nav.current(), Screen::LandingPage);
        assert_eq!(nav.history(), &[Screen::LandingPage]);
    }

    #[test]
    fn test_navigate_and_back() {
        let mut nav = NavigationStack::default();
        nav.navigate(Screen::Auth).unwrap();
        nav.navigate_to("VerificationScreen").unwrap();
        assert_eq!(nav.current(), Screen::VerificationScreen);

        assert!(nav.go_back());
        assert!(nav.go_back());
        assert!(!nav.go_back());
        assert_eq!(nav.current(), Screen::LandingPage);
    }

    #[test]
    fn test_unregistered_screen_is_rejected() {
        let mut nav = NavigationStack::new(Screen::LandingPage, [Screen::Auth]);
        let err = nav.navigate(Screen::VerificationScreen).unwrap_err();
        assert!(matches!(err, AppError::Navigation(_)));
        assert_eq!(nav.current(), Screen::LandingPage);
    }

    #[test]
    fn test_unknown_route_name_is_rejected() {
        let mut nav = NavigationStack::default();
        assert!(matches!(
            nav.navigate_to("Settings"),
            Err(AppError::Navigation(_))
        ));
    }
}
