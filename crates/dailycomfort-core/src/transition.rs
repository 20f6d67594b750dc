//! Exit fade on internal navigation.
//!
//! Activating an internal link is intercepted: the body gets the
//! `page-exit` class and navigation happens once the exit animation has
//! played. Fragment anchors and absolute `http…` links are left alone.

use std::time::Duration;

use crate::page::TimerEvent;
use crate::scheduler::{Scheduler, TimerId};

/// Body class that plays the exit animation.
pub const PAGE_EXIT_CLASS: &str = "page-exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `#…` in-page anchor.
    Fragment,
    /// Absolute `http…` URL.
    External,
    /// Relative link to another page of the app.
    Internal,
}

pub fn classify(href: &str) -> LinkKind {
    if href.starts_with('#') {
        LinkKind::Fragment
    } else if href.starts_with("http") {
        LinkKind::External
    } else {
        LinkKind::Internal
    }
}

#[derive(Debug, Default)]
pub struct PageTransition {
    pending: Option<TimerId>,
}

impl PageTransition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the exit animation is playing.
    pub fn is_exiting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn body_class(&self) -> &'static str {
        if self.is_exiting() {
            PAGE_EXIT_CLASS
        } else {
            ""
        }
    }

    /// Handle a link activation. Returns true when default navigation
    /// must be suppressed. A newer activation replaces a pending one.
    pub fn follow(
        &mut self,
        scheduler: &mut Scheduler<TimerEvent>,
        animation: Duration,
        href: &str,
    ) -> bool {
        if classify(href) != LinkKind::Internal {
            return false;
        }

        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        let navigate = TimerEvent::Navigate(href.to_string());
        self.pending = Some(scheduler.schedule_after(animation, navigate));
        true
    }

    /// The exit animation finished.
    pub fn finish(&mut self, fired: TimerId) -> bool {
        if self.pending == Some(fired) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("#top"), LinkKind::Fragment);
        assert_eq!(classify("https://example.com"), LinkKind::External);
        assert_eq!(classify("http://example.com"), LinkKind::External);
        assert_eq!(classify("/home"), LinkKind::Internal);
        assert_eq!(classify("login.html"), LinkKind::Internal);
    }

    #[test]
    fn test_external_links_pass_through() {
        let mut scheduler = Scheduler::new();
        let mut transition = PageTransition::new();

        assert!(!transition.follow(&mut scheduler, Duration::from_millis(400), "#faq"));
        assert!(!transition.follow(
            &mut scheduler,
            Duration::from_millis(400),
            "https://example.com"
        ));
        assert!(!transition.is_exiting());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_internal_link_navigates_after_animation() {
        let mut scheduler = Scheduler::new();
        let mut transition = PageTransition::new();

        assert!(transition.follow(&mut scheduler, Duration::from_millis(400), "/login"));
        assert_eq!(transition.body_class(), PAGE_EXIT_CLASS);
        assert!(scheduler.advance_to(Duration::from_millis(399)).is_empty());

        let (fired, event) = scheduler.pop_due(Duration::from_millis(400)).unwrap();
        assert_eq!(event, TimerEvent::Navigate("/login".into()));
        assert!(transition.finish(fired));
        assert!(!transition.is_exiting());
    }

    #[test]
    fn test_latest_activation_wins() {
        let mut scheduler = Scheduler::new();
        let mut transition = PageTransition::new();

        transition.follow(&mut scheduler, Duration::from_millis(400), "/login");
        transition.follow(&mut scheduler, Duration::from_millis(400), "/home");

        assert_eq!(
            scheduler.advance_to(Duration::from_secs(1)),
            vec![TimerEvent::Navigate("/home".into())]
        );
    }
}
