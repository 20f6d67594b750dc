//! Daily Comfort Core Library
//!
//! A PIN-gated home page with a rotating message of the day.
//!
//! ## Overview
//!
//! - **Session guard**: pages check a persisted authentication flag; an
//!   inactivity timer logs the user out after 30 minutes.
//! - **PIN login**: masked input, exact comparison, heart-burst celebration.
//! - **Daily messages**: one message per UTC day, persisted so repeat
//!   visits see the same one; extra messages on demand.
//! - **Comfort overlay**: a random comforting message on request.
//!
//! All per-page state lives in a [`PageController`]; store, clock and
//! randomness are injected so every behavior is testable without real
//! time or a real RNG.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use dailycomfort_core::{load_catalog, Config, Environment, Location, PageController, Storage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Storage::new("~/.dailycomfort/comfort.redb")?;
//!     let config = Config::default();
//!     let mut page = PageController::new(Environment::system(Arc::new(store)), config.clone());
//!
//!     page.load(Location::Home)?;
//!     if page.needs_catalog() {
//!         page.install_catalog(load_catalog(&config.catalog_path).await)?;
//!     }
//!
//!     // Let the fade-in play
//!     page.advance(std::time::Duration::from_millis(300))?;
//!     println!("{}", page.message().text());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod celebration;
pub mod clock;
pub mod comfort;
pub mod config;
pub mod controller;
pub mod daily;
pub mod error;
pub mod login;
pub mod page;
pub mod random;
pub mod scheduler;
pub mod session;
pub mod storage;
pub mod transition;

// Re-exports
pub use catalog::{load_catalog, CatalogLoad, CatalogSource, MessageCatalog, Pool};
pub use celebration::{Heart, HeartBurst};
pub use clock::{Clock, FixedClock, SystemClock};
pub use comfort::{BodyLock, ComfortModal, ModalPhase, PointerTarget, Viewport};
pub use config::Config;
pub use controller::{Environment, PageController};
pub use daily::{DailySelection, DisplayPhase, GenerateButton, MessageDisplay};
pub use error::{ComfortError, ComfortResult};
pub use login::{LoginFlow, LoginOutcome, LoginState, PinField};
pub use page::{Effect, Location, TimerEvent};
pub use random::{RandomSource, ScriptedRandom, ThreadRandom};
pub use scheduler::{Scheduler, TimerId};
pub use session::{AccessDecision, Activity, SessionTimer};
pub use storage::{KeyValueStore, MemoryStore, Storage};
pub use transition::{LinkKind, PageTransition};
