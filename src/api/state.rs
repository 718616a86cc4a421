//! Application state for the score estimator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::ConfigLoader;
use crate::models::MockCreditLedger;

/// Shared application state.
///
/// Holds the session's mock-credit ledger. The estimators themselves are
/// pure and need no state.
#[derive(Clone)]
pub struct AppState {
    /// Remaining mock attempts, seeded from the configuration.
    credits: Arc<Mutex<MockCreditLedger>>,
}

impl AppState {
    /// Creates a new application state with a ledger seeded from `config`.
    pub fn new(config: &ConfigLoader) -> Self {
        Self {
            credits: Arc::new(Mutex::new(config.initial_ledger())),
        }
    }

    /// Runs `f` with exclusive access to the credit ledger.
    ///
    /// The lock is held only for the duration of `f`.
    pub fn with_credits<T>(&self, f: impl FnOnce(&mut MockCreditLedger) -> T) -> T {
        let mut ledger = self.credits.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreditKey, Exam, MockKind};

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_one_ledger() {
        let state = AppState::new(&ConfigLoader::default_config());
        let clone = state.clone();
        let key = CreditKey::new(Exam::Neet, MockKind::FullLength);

        clone.with_credits(|ledger| ledger.consume(key)).unwrap();

        assert_eq!(state.with_credits(|ledger| ledger.remaining(key)), 2);
    }
}
