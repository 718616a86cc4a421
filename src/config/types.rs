//! Configuration types for the score estimator service.
//!
//! These structures are deserialized from the YAML files in a
//! configuration directory.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::{CreditKey, Exam, MockKind};

/// HTTP server settings from `server.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on (e.g., "127.0.0.1:3000").
    pub bind_address: String,
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            log_filter: default_log_filter(),
        }
    }
}

/// Initial mock-credit allowances from `credits.yaml`.
///
/// Keys must be valid credit keys such as
/// `jee_main_full_length_mock_credits`; keys left out start at 0.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreditsConfig {
    /// Credits granted per key.
    pub allowances: BTreeMap<CreditKey, u32>,
}

impl Default for CreditsConfig {
    fn default() -> Self {
        let allowances = Exam::ALL
            .into_iter()
            .flat_map(|exam| {
                [
                    (CreditKey::new(exam, MockKind::FullLength), 3),
                    (CreditKey::new(exam, MockKind::Sectional), 10),
                ]
            })
            .collect();
        Self { allowances }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    server: ServerConfig,
    credits: CreditsConfig,
}

impl AppConfig {
    /// Creates a new AppConfig from its component parts.
    pub fn new(server: ServerConfig, credits: CreditsConfig) -> Self {
        Self { server, credits }
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the credit allowances.
    pub fn credits(&self) -> &CreditsConfig {
        &self.credits
    }
}
