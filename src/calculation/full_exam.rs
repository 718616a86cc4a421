//! Full-exam percentile estimation.
//!
//! Both band tables read the percentile as "top X % of candidates", so a
//! higher score never gives a larger percentile number. Granularity is finer
//! at the high end where candidates care most about small differences.

use tracing::debug;

use crate::models::{Exam, PercentileResult};

use super::band_table::{BandTable, ScoreRange};
use super::breakdown::full_exam_breakdown;
use super::interpretation::interpret;
use super::rounding::{estimate_rank, percentage_of};

/// JEE Main bands over `[0, 300]`, highest scores first.
pub const JEE_MAIN_BANDS: [ScoreRange; 13] = [
    ScoreRange::new(290, 300, 1, 1),
    ScoreRange::new(280, 289, 5, 1),
    ScoreRange::new(270, 279, 1, 0),
    ScoreRange::new(250, 269, 2, 0),
    ScoreRange::new(220, 249, 5, 0),
    ScoreRange::new(200, 219, 8, 0),
    ScoreRange::new(180, 199, 12, 0),
    ScoreRange::new(150, 179, 20, 0),
    ScoreRange::new(120, 149, 30, 0),
    ScoreRange::new(90, 119, 45, 0),
    ScoreRange::new(60, 89, 65, 0),
    ScoreRange::new(30, 59, 85, 0),
    ScoreRange::new(0, 29, 100, 0),
];

/// NEET bands over `[0, 720]`, highest scores first.
pub const NEET_BANDS: [ScoreRange; 15] = [
    ScoreRange::new(710, 720, 1, 1),
    ScoreRange::new(700, 709, 5, 1),
    ScoreRange::new(680, 699, 1, 0),
    ScoreRange::new(650, 679, 25, 1),
    ScoreRange::new(620, 649, 5, 0),
    ScoreRange::new(580, 619, 10, 0),
    ScoreRange::new(540, 579, 15, 0),
    ScoreRange::new(500, 539, 22, 0),
    ScoreRange::new(450, 499, 30, 0),
    ScoreRange::new(400, 449, 40, 0),
    ScoreRange::new(350, 399, 50, 0),
    ScoreRange::new(300, 349, 60, 0),
    ScoreRange::new(200, 299, 75, 0),
    ScoreRange::new(100, 199, 90, 0),
    ScoreRange::new(0, 99, 100, 0),
];

impl BandTable<'static> {
    /// Returns the built-in band table for `exam`.
    pub fn for_exam(exam: Exam) -> Self {
        match exam {
            Exam::JeeMain => BandTable::new(exam, &JEE_MAIN_BANDS),
            Exam::Neet => BandTable::new(exam, &NEET_BANDS),
        }
    }
}

/// Estimates percentile, rank, breakdown and interpretation for a full
/// paper.
///
/// `score` is neither validated nor clamped. A score outside every band
/// takes the exam's default percentile (100 for JEE Main, 0 for NEET), and
/// its percentage may fall outside `0..=100`.
///
/// # Examples
///
/// ```
/// use score_estimator::calculation::calculate_full_exam_percentile;
/// use score_estimator::models::Exam;
/// use rust_decimal::Decimal;
///
/// let result = calculate_full_exam_percentile(Exam::JeeMain, 285);
/// assert_eq!(result.percentile, Decimal::new(5, 1));
/// assert_eq!(result.percentage, 95);
/// assert_eq!(result.rank, 4500);
/// assert!(result.interpretation.contains("Phenomenal"));
/// ```
pub fn calculate_full_exam_percentile(exam: Exam, score: i64) -> PercentileResult {
    let profile = exam.profile();
    let table = BandTable::for_exam(exam);

    let percentile = table.percentile_for(score);
    let percentage = percentage_of(score, profile.max_score);
    let rank = estimate_rank(percentile, profile.total_candidates);

    debug!(
        exam = %exam,
        score,
        percentage,
        percentile = %percentile,
        rank,
        "Full exam percentile estimated"
    );

    PercentileResult {
        score,
        percentage,
        percentile,
        rank,
        total_candidates: profile.total_candidates,
        score_distribution: full_exam_breakdown(percentage),
        interpretation: interpret(exam, score, percentile),
    }
}
