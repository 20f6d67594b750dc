//! Application configuration.
//!
//! Defaults reproduce the shipped behavior. A `config.json` in the data
//! directory may override any subset of fields.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ComfortResult;

/// File name looked up by [`Config::load_or_default`].
pub const CONFIG_FILE: &str = "config.json";

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "data/messages.json";

/// Tunables for the login gate, message rotation and animations.
///
/// Durations are stored in milliseconds so the JSON form stays readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// PIN that unlocks the home page.
    pub secret_pin: String,
    /// Glyph shown in place of each typed PIN character.
    pub mask_glyph: char,
    /// JSON message catalog.
    pub catalog_path: PathBuf,
    /// Inactivity window before automatic logout.
    pub session_timeout_ms: u64,
    /// Delay between hiding a message and swapping in the new text.
    pub message_swap_ms: u64,
    /// How long the generate button stays in its loading state.
    pub generate_delay_ms: u64,
    /// Comfort modal exit animation.
    pub modal_close_ms: u64,
    /// Page exit animation before navigating.
    pub page_exit_ms: u64,
    /// PIN field shake animation after a wrong PIN.
    pub shake_ms: u64,
    /// Delay between a correct PIN and navigating home.
    pub login_redirect_ms: u64,
    /// Lifetime of the heart burst overlay.
    pub celebration_ms: u64,
    /// Hearts spawned per celebration.
    pub heart_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            secret_pin: "010523".to_string(),
            mask_glyph: '•',
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            session_timeout_ms: 30 * 60 * 1000,
            message_swap_ms: 300,
            generate_delay_ms: 600,
            modal_close_ms: 300,
            page_exit_ms: 400,
            shake_ms: 500,
            login_redirect_ms: 2200,
            celebration_ms: 3000,
            heart_count: 24,
        }
    }
}

impl Config {
    /// Load `<data_dir>/config.json`, or defaults when the file is absent.
    ///
    /// A present but malformed file is an error rather than a silent default.
    pub fn load_or_default(data_dir: impl AsRef<Path>) -> ComfortResult<Self> {
        let path = data_dir.as_ref().join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&raw)?;
        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    pub fn session_timeout(&self) -> Duration {
        Duration::from_millis(self.session_timeout_ms)
    }

    pub fn message_swap(&self) -> Duration {
        Duration::from_millis(self.message_swap_ms)
    }

    pub fn generate_delay(&self) -> Duration {
        Duration::from_millis(self.generate_delay_ms)
    }

    pub fn modal_close(&self) -> Duration {
        Duration::from_millis(self.modal_close_ms)
    }

    pub fn page_exit(&self) -> Duration {
        Duration::from_millis(self.page_exit_ms)
    }

    pub fn shake(&self) -> Duration {
        Duration::from_millis(self.shake_ms)
    }

    pub fn login_redirect(&self) -> Duration {
        Duration::from_millis(self.login_redirect_ms)
    }

    pub fn celebration(&self) -> Duration {
        Duration::from_millis(self.celebration_ms)
    }
}
