//! Mock-attempt credit accounting.
//!
//! Each exam/mock-kind pair has a fixed string key and a balance of
//! remaining attempts. The ledger is an explicit value owned by whoever
//! serves the session; nothing here is global.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::Exam;

/// The kind of mock attempt a credit pays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MockKind {
    /// A complete, timed paper.
    FullLength,
    /// A single-subject section.
    Sectional,
}

impl MockKind {
    /// Every mock kind, in a stable order.
    pub const ALL: [MockKind; 2] = [MockKind::FullLength, MockKind::Sectional];

    fn key(self) -> &'static str {
        match self {
            MockKind::FullLength => "full_length",
            MockKind::Sectional => "sectional",
        }
    }
}

/// Identifies one credit balance.
///
/// Rendered as `<exam>_<kind>_mock_credits`, e.g.
/// `jee_main_full_length_mock_credits`.
///
/// # Example
///
/// ```
/// use score_estimator::models::{CreditKey, Exam, MockKind};
///
/// let key: CreditKey = "neet_sectional_mock_credits".parse().unwrap();
/// assert_eq!(key, CreditKey::new(Exam::Neet, MockKind::Sectional));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CreditKey {
    /// The exam the mock belongs to.
    pub exam: Exam,
    /// Full-length or sectional.
    pub kind: MockKind,
}

impl CreditKey {
    /// Creates a key for the given exam and mock kind.
    pub fn new(exam: Exam, kind: MockKind) -> Self {
        Self { exam, kind }
    }

    /// Iterates over every valid key.
    pub fn all() -> impl Iterator<Item = CreditKey> {
        Exam::ALL
            .into_iter()
            .flat_map(|exam| MockKind::ALL.into_iter().map(move |kind| CreditKey::new(exam, kind)))
    }
}

impl fmt::Display for CreditKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_mock_credits", self.exam.key(), self.kind.key())
    }
}

impl FromStr for CreditKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CreditKey::all()
            .find(|key| key.to_string() == s)
            .ok_or_else(|| EngineError::UnknownCreditKey { key: s.to_string() })
    }
}

impl TryFrom<String> for CreditKey {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CreditKey> for String {
    fn from(key: CreditKey) -> Self {
        key.to_string()
    }
}

/// Remaining mock attempts per credit key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockCreditLedger {
    balances: BTreeMap<CreditKey, u32>,
}

impl MockCreditLedger {
    /// Creates a ledger seeded with the given allowances.
    pub fn new(allowances: BTreeMap<CreditKey, u32>) -> Self {
        Self {
            balances: allowances,
        }
    }

    /// Returns the remaining credits for `key` (0 if never seeded).
    pub fn remaining(&self, key: CreditKey) -> u32 {
        self.balances.get(&key).copied().unwrap_or(0)
    }

    /// Returns true if a mock attempt for `key` may start.
    pub fn can_start(&self, key: CreditKey) -> bool {
        self.remaining(key) > 0
    }

    /// Spends one credit and returns the balance left afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CreditsExhausted`] if the balance is already 0.
    /// The balance is left untouched in that case.
    pub fn consume(&mut self, key: CreditKey) -> EngineResult<u32> {
        if !self.can_start(key) {
            return Err(EngineError::CreditsExhausted {
                key: key.to_string(),
            });
        }

        let balance = self.balances.entry(key).or_insert(0);
        *balance -= 1;
        debug!(key = %key, remaining = *balance, "Mock credit consumed");
        Ok(*balance)
    }

    /// Adds `credits` to the balance for `key`, saturating at `u32::MAX`.
    pub fn grant(&mut self, key: CreditKey, credits: u32) -> u32 {
        let balance = self.balances.entry(key).or_insert(0);
        *balance = balance.saturating_add(credits);
        debug!(key = %key, credits, remaining = *balance, "Mock credits granted");
        *balance
    }

    /// Returns every balance, keyed by its string form, in key order.
    pub fn snapshot(&self) -> BTreeMap<String, u32> {
        CreditKey::all()
            .map(|key| (key.to_string(), self.remaining(key)))
            .collect()
    }
}
