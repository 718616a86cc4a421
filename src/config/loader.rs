//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::MockCreditLedger;

use super::types::{AppConfig, CreditsConfig, ServerConfig};

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── server.yaml   # Bind address and log filter
/// └── credits.yaml  # Initial mock-credit allowances
/// ```
///
/// # Example
///
/// ```no_run
/// use score_estimator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// let ledger = loader.initial_ledger();
/// println!("Credit balances: {:?}", ledger.snapshot());
/// # Ok::<(), score_estimator::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A credit key in `credits.yaml` is not a known key
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let server = Self::load_yaml::<ServerConfig>(&path.join("server.yaml"))?;
        let credits = Self::load_yaml::<CreditsConfig>(&path.join("credits.yaml"))?;

        Ok(Self {
            config: AppConfig::new(server, credits),
        })
    }

    /// Returns the built-in configuration used when no directory is given.
    pub fn default_config() -> Self {
        Self::default()
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
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        self.config.server()
    }

    /// Builds a fresh credit ledger seeded with the configured allowances.
    pub fn initial_ledger(&self) -> MockCreditLedger {
        MockCreditLedger::new(self.config.credits().allowances.clone())
    }
}
