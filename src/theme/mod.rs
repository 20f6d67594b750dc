//! Visual theme for Daily Comfort.

mod styles;

pub use styles::GLOBAL_STYLES;
