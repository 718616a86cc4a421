//! Error types for the score estimator.
//!
//! The estimator itself never fails: every score maps to a defined result.
//! These errors cover everything around it, such as configuration loading,
//! the mock-credit ledger and request validation.

use thiserror::Error;

use crate::models::Exam;

/// The main error type for the score estimator service.
///
/// # Example
///
/// ```
/// use score_estimator::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/server.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/server.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A string did not name any known mock-credit key.
    #[error("Unknown mock credit key: {key}")]
    UnknownCreditKey {
        /// The key that was not recognised.
        key: String,
    },

    /// A mock attempt was requested but no credits remain for its key.
    #[error("No mock credits remaining for '{key}'")]
    CreditsExhausted {
        /// The credit key with a zero balance.
        key: String,
    },

    /// A request was structurally valid JSON but semantically incomplete.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// A percentile band table has a gap or an overlap.
    #[error("Invalid band table for {exam}: {message}")]
    InvalidBandTable {
        /// The exam whose table is malformed.
        exam: Exam,
        /// A description of the gap or overlap.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
