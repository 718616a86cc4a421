//! Exam identifiers and their fixed scoring constants.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The entrance exams the estimator knows how to score.
///
/// # Example
///
/// ```
/// use score_estimator::models::Exam;
///
/// let exam: Exam = serde_json::from_str("\"jee_main\"").unwrap();
/// assert_eq!(exam, Exam::JeeMain);
/// assert_eq!(exam.profile().max_score, 300);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exam {
    /// JEE Main, engineering entrance, 300 marks.
    JeeMain,
    /// NEET UG, medical entrance, 720 marks.
    Neet,
}

/// Fixed calibration constants for one exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamProfile {
    /// Display name of the exam.
    pub name: &'static str,
    /// Highest attainable score.
    pub max_score: i64,
    /// Size of the modelled candidate pool used for rank estimates.
    pub total_candidates: u64,
    /// Marks awarded per correct answer.
    pub marks_per_question: i64,
    /// Percentile reported when a score matches no band.
    pub default_percentile: Decimal,
}

const JEE_MAIN_PROFILE: ExamProfile = ExamProfile {
    name: "JEE Main",
    max_score: 300,
    total_candidates: 900_000,
    marks_per_question: 4,
    default_percentile: Decimal::ONE_HUNDRED,
};

const NEET_PROFILE: ExamProfile = ExamProfile {
    name: "NEET",
    max_score: 720,
    total_candidates: 1_600_000,
    marks_per_question: 4,
    default_percentile: Decimal::ZERO,
};

impl Exam {
    /// Every supported exam, in a stable order.
    pub const ALL: [Exam; 2] = [Exam::JeeMain, Exam::Neet];

    /// Returns the fixed constants for this exam.
    pub fn profile(self) -> &'static ExamProfile {
        match self {
            Exam::JeeMain => &JEE_MAIN_PROFILE,
            Exam::Neet => &NEET_PROFILE,
        }
    }

    /// The snake_case identifier used in JSON and in credit keys.
    pub fn key(self) -> &'static str {
        match self {
            Exam::JeeMain => "jee_main",
            Exam::Neet => "neet",
        }
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().name)
    }
}
