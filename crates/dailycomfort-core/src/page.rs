//! Page locations, deferred events and host effects.

use serde::{Deserialize, Serialize};

/// Entry points of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Anonymous landing page.
    Landing,
    /// PIN entry.
    Login,
    /// Authenticated home page with the daily message.
    Home,
}

impl Location {
    pub fn href(&self) -> &'static str {
        match self {
            Location::Landing => "/",
            Location::Login => "/login",
            Location::Home => "/home",
        }
    }

    /// Resolve an internal href to a location.
    ///
    /// Query strings and fragments are ignored, and the legacy `.html`
    /// page names resolve to the same entry points.
    pub fn from_href(href: &str) -> Option<Self> {
        let path = href
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_start_matches("./")
            .trim_start_matches('/');

        match path {
            "" | "index" | "index.html" => Some(Location::Landing),
            "login" | "login.html" => Some(Location::Login),
            "home" | "home.html" => Some(Location::Home),
            _ => None,
        }
    }

    /// Whether the page requires the authentication flag.
    pub fn is_protected(&self) -> bool {
        matches!(self, Location::Home)
    }
}

/// Deferred events owned by the page scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Inactivity window elapsed.
    SessionExpired,
    /// Swap the faded-out message text and fade back in.
    MessageSwap,
    /// Generate button loading period finished.
    GenerateSettled,
    /// Comfort modal exit animation finished.
    ModalClosed,
    /// PIN field shake animation finished.
    ShakeEnded,
    /// A single celebration heart finished its animation.
    HeartExpired(u32),
    /// Celebration overlay lifetime elapsed.
    CelebrationEnded,
    /// Post-login navigation to the home page.
    LoginRedirect,
    /// Page exit animation finished; navigate to the href.
    Navigate(String),
}

/// Side effects the host must perform on behalf of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate to an internal href.
    Navigate(String),
    /// Show a blocking notice.
    Alert(String),
    /// Return keyboard focus to the PIN field.
    FocusPin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_roundtrip() {
        for location in [Location::Landing, Location::Login, Location::Home] {
            assert_eq!(Location::from_href(location.href()), Some(location));
        }
    }

    #[test]
    fn test_legacy_page_names() {
        assert_eq!(Location::from_href("index.html"), Some(Location::Landing));
        assert_eq!(Location::from_href("./login.html"), Some(Location::Login));
        assert_eq!(Location::from_href("home.html?from=login"), Some(Location::Home));
        assert_eq!(Location::from_href("/about"), None);
    }

    #[test]
    fn test_only_home_is_protected() {
        assert!(Location::Home.is_protected());
        assert!(!Location::Login.is_protected());
        assert!(!Location::Landing.is_protected());
    }
}
