//! Application settings loaded from an optional `orderdesk.toml` file.
//!
//! Every knob has a default, so a missing file yields a fully usable
//! configuration. The analytics windows live here rather than as hidden
//! constants: the original dashboard disagreed with itself about the
//! "new clients" window (7 days in one code path, 30 in another), so the
//! window is explicit configuration with the persistent path's value as
//! the default.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default location of the settings file, relative to the working directory.
pub const DEFAULT_SETTINGS_PATH: &str = "orderdesk.toml";

/// Tunable application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Trailing window (days) a client's `last_active` must fall in to count
    /// as a "new client" in the analytics
    pub new_client_window_days: i64,
    /// Restock quantity applied when the caller omits one
    pub default_restock_quantity: i32,
    /// Maximum rows returned by the recent-orders projection
    pub recent_orders_limit: u64,
    /// Maximum rows returned by the client activity feed
    pub activity_feed_limit: u64,
    /// Enforce the strict order-status transition graph instead of allowing
    /// any status to follow any status
    pub strict_status_transitions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            new_client_window_days: 30,
            default_restock_quantity: 10,
            recent_orders_limit: 10,
            activity_feed_limit: 10,
            strict_status_transitions: false,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the TOML is invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
            message: format!("Failed to read settings file: {e}"),
        })?;

        toml::from_str(&contents).map_err(|e| Error::Config {
            message: format!("Failed to parse settings file: {e}"),
        })
    }

    /// Loads settings from [`DEFAULT_SETTINGS_PATH`], falling back to the
    /// defaults when the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default() -> Result<Self> {
        if Path::new(DEFAULT_SETTINGS_PATH).exists() {
            Self::load(DEFAULT_SETTINGS_PATH)
        } else {
            Ok(Self::default())
        }
    }
}
