//! Configuration types for the shift roster.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Daily hours cap written into a freshly initialised data directory.
pub const DEFAULT_MAX_DAILY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Scheduling policy shared by every assignment.
///
/// Stored in `config.json` as `{"maxDailyHours": 8}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
    /// The most hours one employee may be assigned on a single date.
    #[serde(with = "rust_decimal::serde::float")]
    pub max_daily_hours: Decimal,
}

impl PolicyConfig {
    /// Creates a policy with the given daily cap.
    pub fn new(max_daily_hours: Decimal) -> Self {
        Self { max_daily_hours }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DAILY_HOURS)
    }
}

/// Runtime settings for the command line and HTTP front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the JSON data files.
    pub data_dir: PathBuf,
    /// Address the HTTP API binds to.
    pub listen_addr: String,
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            listen_addr: "127.0.0.1:3000".to_string(),
            log_level: "info".to_string(),
        }
    }
}
