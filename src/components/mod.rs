//! UI Components for Daily Comfort.

mod comfort_modal;
mod heart_burst;
mod page_shell;
mod transition_link;

pub use comfort_modal::{measure_viewport, ComfortModal};
pub use heart_burst::HeartBurst;
pub use page_shell::PageShell;
pub use transition_link::TransitionLink;
