//! Message catalog loading.
//!
//! The catalog is a JSON document with three pools of messages:
//!
//! ```json
//! { "daily": ["..."], "extra": ["..."], "comfort": ["..."] }
//! ```
//!
//! It is read exactly once per page session. Any failure (missing file,
//! I/O error, malformed JSON, missing pool, empty pool) is logged and
//! replaced by [`MessageCatalog::fallback`], so callers always receive a
//! usable catalog.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ComfortError, ComfortResult};

/// One of the three message pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pool {
    /// Rotates once per calendar day.
    Daily,
    /// Rolled on demand by the generate button.
    Extra,
    /// Shown in the comfort overlay.
    Comfort,
}

impl Pool {
    pub fn name(&self) -> &'static str {
        match self {
            Pool::Daily => "daily",
            Pool::Extra => "extra",
            Pool::Comfort => "comfort",
        }
    }
}

/// The three named message pools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    pub daily: Vec<String>,
    pub extra: Vec<String>,
    pub comfort: Vec<String>,
}

impl MessageCatalog {
    /// Built-in catalog used whenever the JSON resource can't be used.
    pub fn fallback() -> Self {
        fn owned(messages: &[&str]) -> Vec<String> {
            messages.iter().map(|m| m.to_string()).collect()
        }

        Self {
            daily: owned(&[
                "You are loved more than you know. 💚",
                "Your smile makes my whole day brighter.",
                "I'm so proud of you, always.",
                "You don't have to be perfect for me to love you.",
            ]),
            extra: owned(&[
                "It's okay to rest today.",
                "You are more capable than you think.",
                "Bad days don't define you.",
                "Take it one step at a time.",
            ]),
            comfort: owned(&[
                "I'm always here for you, no matter what.",
                "You've survived 100% of your worst days. You're doing amazing.",
                "Breathe. You are safe. You are loved.",
                "If today feels heavy, I wish I could hug you right now. 💚",
            ]),
        }
    }

    /// Parse and validate a catalog document.
    pub fn from_json(raw: &str) -> ComfortResult<Self> {
        let catalog: MessageCatalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Every pool must hold at least one message.
    pub fn validate(&self) -> ComfortResult<()> {
        for pool in [Pool::Daily, Pool::Extra, Pool::Comfort] {
            if self.pool(pool).is_empty() {
                return Err(ComfortError::Catalog(format!("{} pool is empty", pool.name())));
            }
        }
        Ok(())
    }

    pub fn pool(&self, pool: Pool) -> &[String] {
        match pool {
            Pool::Daily => &self.daily,
            Pool::Extra => &self.extra,
            Pool::Comfort => &self.comfort,
        }
    }
}

/// Where a loaded catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Parsed from the JSON resource.
    Loaded,
    /// Built-in fallback; carries the reason the resource was rejected.
    Fallback(String),
}

/// Result of a catalog load. Always carries a usable catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLoad {
    pub catalog: MessageCatalog,
    pub source: CatalogSource,
}

impl CatalogLoad {
    /// Wrap a parsed catalog. A catalog with an empty pool is replaced by
    /// the fallback.
    pub fn loaded(catalog: MessageCatalog) -> Self {
        match catalog.validate() {
            Ok(()) => Self {
                catalog,
                source: CatalogSource::Loaded,
            },
            Err(e) => {
                tracing::warn!("Rejecting catalog: {}", e);
                Self::fallback(e.to_string())
            }
        }
    }

    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            catalog: MessageCatalog::fallback(),
            source: CatalogSource::Fallback(reason.into()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, CatalogSource::Fallback(_))
    }
}

/// Read the catalog at `path`, falling back to the built-in catalog on any
/// failure. Makes exactly one attempt.
pub async fn load_catalog(path: impl AsRef<Path>) -> CatalogLoad {
    let path = path.as_ref();

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("Error loading messages from {:?}: {}", path, e);
            return CatalogLoad::fallback(format!("failed to read {}: {}", path.display(), e));
        }
    };

    match MessageCatalog::from_json(&raw) {
        Ok(catalog) => {
            tracing::info!(
                "Messages loaded successfully ({} daily, {} extra, {} comfort)",
                catalog.daily.len(),
                catalog.extra.len(),
                catalog.comfort.len()
            );
            CatalogLoad::loaded(catalog)
        }
        Err(e) => {
            tracing::error!("Error parsing messages from {:?}: {}", path, e);
            CatalogLoad::fallback(e.to_string())
        }
    }
}
