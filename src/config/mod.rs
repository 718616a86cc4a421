//! Configuration loading for the score estimator service.
//!
//! This module loads server settings and initial mock-credit allowances from
//! a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use score_estimator::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config").unwrap();
//! println!("Binding to {}", loader.server().bind_address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, CreditsConfig, ServerConfig};
