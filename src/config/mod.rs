//! Configuration for the shift roster.
//!
//! Two layers live here. The scheduling policy ([`PolicyConfig`]) is stored
//! beside the data in `config.json` and read through the record store.
//! Runtime settings ([`Settings`]) come from an optional YAML file loaded by
//! [`SettingsLoader`].
//!
//! # Example
//!
//! ```no_run
//! use shift_roster::config::SettingsLoader;
//!
//! let settings = SettingsLoader::load("./roster.yaml").unwrap();
//! println!("Data directory: {}", settings.data_dir.display());
//! ```

mod loader;
mod types;

pub use loader::SettingsLoader;
pub use types::{DEFAULT_MAX_DAILY_HOURS, PolicyConfig, Settings};
