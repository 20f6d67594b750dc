//! Session guard: authentication flag and inactivity expiry.
//!
//! Access to protected pages requires [`AUTH_KEY`] to hold exactly `"true"`.
//! While a protected page is open, a single [`SessionTimer`] counts down
//! the inactivity window; any tracked [`Activity`] cancels and re-arms it.

use std::time::Duration;

use crate::error::ComfortResult;
use crate::page::{Location, TimerEvent};
use crate::scheduler::{Scheduler, TimerId};
use crate::storage::{KeyValueStore, AUTH_KEY};

/// Value the authentication flag must hold.
pub const AUTH_VALUE: &str = "true";

/// Notice shown when the inactivity window elapses.
pub const EXPIRY_NOTICE: &str = "Your session has expired. Please log in again.";

/// User activity that keeps a session alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Click,
    KeyPress,
    MouseMove,
    Scroll,
}

/// Outcome of the page-load access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Show the requested page.
    Granted,
    /// Unauthenticated, but already on the login page; don't redirect again.
    Stay,
    /// Protected page without authentication.
    RedirectToLogin,
    /// Already authenticated; skip the PIN screen.
    RedirectToHome,
}

/// Whether the stored flag grants access.
pub fn is_authenticated(store: &dyn KeyValueStore) -> ComfortResult<bool> {
    Ok(store.get(AUTH_KEY)?.as_deref() == Some(AUTH_VALUE))
}

/// Set the authentication flag.
pub fn grant(store: &dyn KeyValueStore) -> ComfortResult<()> {
    store.set(AUTH_KEY, AUTH_VALUE)
}

/// Clear the authentication flag.
pub fn revoke(store: &dyn KeyValueStore) -> ComfortResult<()> {
    store.remove(AUTH_KEY)
}

/// Decide what a page load at `location` should do.
pub fn check_access(
    store: &dyn KeyValueStore,
    location: Location,
) -> ComfortResult<AccessDecision> {
    let authenticated = is_authenticated(store)?;

    let decision = match (location, authenticated) {
        (Location::Login, true) => AccessDecision::RedirectToHome,
        (Location::Login, false) => AccessDecision::Stay,
        (location, false) if location.is_protected() => AccessDecision::RedirectToLogin,
        _ => AccessDecision::Granted,
    };

    Ok(decision)
}

/// The single inactivity timer of a protected page.
#[derive(Debug)]
pub struct SessionTimer {
    timeout: Duration,
    pending: Option<TimerId>,
}

impl SessionTimer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            pending: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancel any pending expiry and schedule a fresh one.
    pub fn arm(&mut self, scheduler: &mut Scheduler<TimerEvent>) {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        self.pending = Some(scheduler.schedule_after(self.timeout, TimerEvent::SessionExpired));
    }

    /// Re-arm on activity. Activity before the timer is armed is ignored.
    pub fn on_activity(
        &mut self,
        scheduler: &mut Scheduler<TimerEvent>,
        activity: Activity,
    ) -> bool {
        if !self.is_armed() {
            return false;
        }
        tracing::trace!(?activity, "Session activity, re-arming timer");
        self.arm(scheduler);
        true
    }

    pub fn disarm(&mut self, scheduler: &mut Scheduler<TimerEvent>) {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
    }

    /// Consume a fired expiry. Returns false for a timer this session
    /// doesn't own.
    pub fn expire(&mut self, fired: TimerId) -> bool {
        if self.pending == Some(fired) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
