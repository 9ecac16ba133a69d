//! Settings loading functionality.
//!
//! This module provides the [`SettingsLoader`] type for reading runtime
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::Settings;

/// Loads runtime settings from YAML.
///
/// A settings file looks like:
/// ```text
/// data_dir: /var/lib/roster
/// listen_addr: 0.0.0.0:3000
/// log_level: debug
/// ```
/// Any key may be omitted; missing keys take their [`Settings::default`]
/// values.
#[derive(Debug, Clone, Copy)]
pub struct SettingsLoader;

impl SettingsLoader {
    /// Loads settings from the specified file.
    ///
    /// # Returns
    ///
    /// Returns the settings on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shift_roster::config::SettingsLoader;
    ///
    /// let settings = SettingsLoader::load("./roster.yaml")?;
    /// # Ok::<(), shift_roster::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Settings> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })
    }

    /// Loads settings from `path` if given, otherwise returns the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> EngineResult<Settings> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("No settings file given, using defaults");
                Ok(Settings::default())
            }
        }
    }

    /// Parses settings from YAML text.
    pub fn parse(content: &str) -> EngineResult<Settings> {
        // An empty document deserializes as unit, not a map
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }
}
