//! Application configuration.

use std::path::Path;

use anyhow::{Context, Result};
use canteen_observability::LogConfig;
use serde::{Deserialize, Serialize};

use crate::checkout::{TrackerSchedule, DEFAULT_DELAYS_MS};
use crate::money::Money;
use crate::search::{DEFAULT_QUICK_BITE_LIMIT, DEFAULT_QUICK_BITE_MAX_PRICE};

/// Configuration file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanteenConfig {
    /// Order tracker timing.
    #[serde(default)]
    pub tracker: TrackerConfig,

    /// Menu display.
    #[serde(default)]
    pub menu: MenuConfig,

    /// Logging.
    #[serde(default)]
    pub logging: LogConfig,
}

impl CanteenConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to a file, in the format its extension names.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Tracker schedule from the configured delays.
    pub fn schedule(&self) -> TrackerSchedule {
        TrackerSchedule::from_millis(self.tracker.delays_ms)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Order tracker timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Milliseconds spent in each of the first four stages.
    #[serde(default = "default_delays_ms")]
    pub delays_ms: [u64; 4],
}

fn default_delays_ms() -> [u64; 4] {
    DEFAULT_DELAYS_MS
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            delays_ms: default_delays_ms(),
        }
    }
}

/// Menu display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Highest price shown in the quick bites row, in rupees.
    #[serde(default = "default_quick_bite_max_price")]
    pub quick_bite_max_price: Money,

    /// Number of quick bites shown.
    #[serde(default = "default_quick_bite_limit")]
    pub quick_bite_limit: usize,
}

fn default_quick_bite_max_price() -> Money {
    DEFAULT_QUICK_BITE_MAX_PRICE
}

fn default_quick_bite_limit() -> usize {
    DEFAULT_QUICK_BITE_LIMIT
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            quick_bite_max_price: default_quick_bite_max_price(),
            quick_bite_limit: default_quick_bite_limit(),
        }
    }
}
