//! Core data models for the score estimator.
//!
//! This module contains the exam descriptions, the result records produced
//! by the estimator and the mock-credit ledger used by the API.

mod credits;
mod exam;
mod percentile_result;

pub use credits::{CreditKey, MockCreditLedger, MockKind};
pub use exam::{Exam, ExamProfile};
pub use percentile_result::{PercentileResult, ScoreBreakdown};
