//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pay tier
//! table from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, PayrollConfigFile};

/// Loads and provides access to the pay tier configuration.
///
/// # File Structure
///
/// ```text
/// weekday_codes: [MO, TU, WE, TH, FR]
/// weekday:
///   - { start: "00:01", end: "09:00", rate: 25 }
///   - { start: "09:01", end: "18:00", rate: 15 }
///   - { start: "18:01", end: "00:00", rate: 20 }
/// weekend:
///   - { start: "00:01", end: "09:00", rate: 30 }
///   - { start: "09:01", end: "18:00", rate: 20 }
///   - { start: "18:01", end: "00:00", rate: 25 }
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pay_tiers.yaml")?;
/// assert!(loader.config().is_weekday_code("MO"));
/// # Ok::<(), shift_payroll::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or does not have exactly three
    ///   tiers per category (`ConfigParseError`)
    /// - The table breaks an invariant (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let file = Self::load_yaml::<PayrollConfigFile>(path)?;
        let config = PayrollConfig::try_from(file)?;

        debug!(
            path = %path.display(),
            weekday_codes = ?config.weekday_codes(),
            "Loaded pay tier configuration"
        );

        Ok(Self { config })
    }

    /// Returns a loader holding the standard tier table.
    pub fn standard() -> Self {
        Self {
            config: PayrollConfig::standard(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
