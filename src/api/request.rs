//! Request types for the score estimator API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    calculate_full_exam_percentile, calculate_jee_main_subject_percentile,
    calculate_neet_subject_percentile,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{Exam, PercentileResult};

/// Request body for `POST /percentile/full`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExamRequest {
    /// The exam the score belongs to.
    pub exam: Exam,
    /// The raw score; not clamped.
    pub score: i64,
}

impl FullExamRequest {
    /// Runs the full-exam estimator for this request.
    pub fn estimate(&self) -> PercentileResult {
        calculate_full_exam_percentile(self.exam, self.score)
    }
}

/// Request body for `POST /percentile/subject`.
///
/// JEE Main subjects are sized by question count, NEET subjects by maximum
/// score, so exactly one of `total_questions` or `max_score` is required
/// depending on `exam`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRequest {
    /// The exam the subject belongs to.
    pub exam: Exam,
    /// Subject name, e.g. "Physics".
    pub subject: String,
    /// The raw subject score.
    pub score: i64,
    /// Number of questions in the section (JEE Main).
    #[serde(default)]
    pub total_questions: Option<i64>,
    /// Maximum attainable section score (NEET).
    #[serde(default)]
    pub max_score: Option<i64>,
}

impl SubjectRequest {
    /// Runs the exam's subject estimator for this request.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRequest`] if the sizing field the exam
    /// needs is missing.
    pub fn estimate(&self) -> EngineResult<PercentileResult> {
        match self.exam {
            Exam::JeeMain => {
                let total_questions = self.total_questions.ok_or_else(|| {
                    EngineError::InvalidRequest {
                        field: "total_questions".to_string(),
                        message: "required for JEE Main subject scores".to_string(),
                    }
                })?;
                Ok(calculate_jee_main_subject_percentile(
                    &self.subject,
                    self.score,
                    total_questions,
                ))
            }
            Exam::Neet => {
                let max_score = self.max_score.ok_or_else(|| EngineError::InvalidRequest {
                    field: "max_score".to_string(),
                    message: "required for NEET subject scores".to_string(),
                })?;
                Ok(calculate_neet_subject_percentile(
                    &self.subject,
                    self.score,
                    max_score,
                ))
            }
        }
    }
}

/// Request body for `POST /category`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRequest {
    /// The exam whose ladder to use.
    pub exam: Exam,
    /// Percentile in that exam's convention.
    pub percentile: Decimal,
}

/// Request body for `POST /mocks/:key/grant`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantRequest {
    /// Number of attempts to add to the balance.
    pub credits: u32,
}
