//! Page controller context for Daily Comfort.
//!
//! Provides the single [`PageController`] to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut page = use_page();
//!
//! // Read view state (subscribes the component)
//! let text = page.with(|p| p.message().text().to_string());
//!
//! // Forward user input
//! page.update(|p| p.activity(Activity::Click));
//! ```
//!
//! Real time reaches the controller lazily: the page shell only advances
//! it when a timer is due, and every [`PageHandle::update`] first feeds in
//! the time that passed since. Timers scheduled from input are therefore
//! always relative to the current instant.

use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dailycomfort_core::{Config, Environment, KeyValueStore, MemoryStore, PageController, Storage};
use dioxus::prelude::*;

/// Database file inside the data directory.
const DB_FILE: &str = "comfort.redb";

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the configuration resolved at startup.
pub fn get_config() -> Config {
    crate::get_config()
}

/// Build the controller over the persistent store.
///
/// If the database can't be opened the app still runs on an in-memory
/// store; nothing is remembered across restarts in that case.
pub fn create_controller() -> PageController {
    let path = get_data_dir().join(DB_FILE);
    let store: Arc<dyn KeyValueStore> = match Storage::new(&path) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::error!("Failed to open store at {:?}: {}", path, e);
            Arc::new(MemoryStore::new())
        }
    };

    PageController::new(Environment::system(store), get_config())
}

/// Shared access to the page controller.
#[derive(Clone, Copy)]
pub struct PageHandle {
    page: Signal<PageController>,
    /// Wall-clock instant the controller's timers were last advanced to.
    synced: CopyValue<Instant>,
}

impl PageHandle {
    pub fn new(page: Signal<PageController>, synced: CopyValue<Instant>) -> Self {
        Self { page, synced }
    }

    /// Read the controller, subscribing the calling component.
    pub fn with<R>(&self, f: impl FnOnce(&PageController) -> R) -> R {
        f(&self.page.read())
    }

    /// Read the controller without subscribing.
    pub fn peek_with<R>(&self, f: impl FnOnce(&PageController) -> R) -> R {
        f(&self.page.peek())
    }

    /// Catch the controller up to the wall clock, then mutate it.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut PageController) -> R) -> R {
        let now = Instant::now();
        let lag = now.saturating_duration_since(*self.synced.peek());
        self.synced.set(now);

        let mut page = self.page.write();
        if let Err(e) = page.advance(lag) {
            tracing::error!("Timer handling failed: {}", e);
        }
        f(&mut page)
    }

    /// Real time not yet fed to the controller.
    pub fn lag(&self) -> Duration {
        self.synced.peek().elapsed()
    }

    /// Whether a pending timer has come due in real time.
    pub fn timer_due(&self) -> bool {
        let lag = self.lag();
        self.peek_with(|p| p.timer_due(lag))
    }

    /// Real time until the next pending timer, if any.
    pub fn time_until_next(&self) -> Option<Duration> {
        let lag = self.lag();
        self.peek_with(|p| p.time_until_next())
            .map(|next| next.saturating_sub(lag))
    }

    pub fn has_effects(&self) -> bool {
        self.peek_with(|p| p.has_effects())
    }
}

/// Hook to access the page controller from context.
pub fn use_page() -> PageHandle {
    use_context::<PageHandle>()
}

/// Mounted PIN input, used to return focus after a wrong PIN.
pub fn use_pin_element() -> Signal<Option<Rc<MountedData>>> {
    use_context::<Signal<Option<Rc<MountedData>>>>()
}
