//! Subject-level percentile estimation.
//!
//! Subject results map accuracy into five coarse percentile buckets. Rank is
//! not modelled at this scope, so `rank` and `total_candidates` are 0.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Exam, PercentileResult};

use super::breakdown::subject_breakdown;
use super::rounding::percentage_of;

/// Ascending JEE Main ladder: the first `percentage < bound` row wins.
const JEE_MAIN_SUBJECT_LADDER: [(i64, Decimal); 4] = [
    (40, Decimal::from_parts(70, 0, 0, false, 0)),
    (60, Decimal::from_parts(35, 0, 0, false, 0)),
    (75, Decimal::from_parts(15, 0, 0, false, 0)),
    (90, Decimal::from_parts(5, 0, 0, false, 0)),
];

const JEE_MAIN_SUBJECT_TOP: Decimal = Decimal::ONE;

/// Percentiles for NEET breakpoint ladders; the last entry is the fallback.
const NEET_SUBJECT_PERCENTILES: [Decimal; 5] = [
    Decimal::from_parts(5, 0, 0, false, 0),
    Decimal::from_parts(20, 0, 0, false, 0),
    Decimal::from_parts(40, 0, 0, false, 0),
    Decimal::from_parts(60, 0, 0, false, 0),
    Decimal::from_parts(80, 0, 0, false, 0),
];

/// Descending accuracy breakpoints for a group of NEET subjects.
struct SubjectBreakpoints {
    subjects: &'static [&'static str],
    breakpoints: [i64; 4],
}

const NEET_SUBJECT_BREAKPOINTS: [SubjectBreakpoints; 3] = [
    SubjectBreakpoints {
        subjects: &["physics"],
        breakpoints: [85, 70, 55, 40],
    },
    SubjectBreakpoints {
        subjects: &["chemistry"],
        breakpoints: [90, 75, 60, 45],
    },
    SubjectBreakpoints {
        subjects: &["biology", "botany", "zoology"],
        breakpoints: [92, 80, 65, 50],
    },
];

const NEET_DEFAULT_BREAKPOINTS: [i64; 4] = [80, 65, 50, 35];

fn neet_breakpoints(subject: &str) -> [i64; 4] {
    let subject = subject.trim();
    NEET_SUBJECT_BREAKPOINTS
        .iter()
        .find(|group| {
            group
                .subjects
                .iter()
                .any(|name| name.eq_ignore_ascii_case(subject))
        })
        .map(|group| group.breakpoints)
        .unwrap_or(NEET_DEFAULT_BREAKPOINTS)
}

fn subject_result(
    subject: &str,
    score: i64,
    percentage: i64,
    percentile: Decimal,
) -> PercentileResult {
    PercentileResult {
        score,
        percentage,
        percentile,
        rank: 0,
        total_candidates: 0,
        score_distribution: subject_breakdown(percentage),
        interpretation: format!("{} performance: {}% accuracy", subject, percentage),
    }
}

/// Estimates a JEE Main subject percentile.
///
/// The maximum score is `total_questions` times the exam's marks per
/// question. The same ladder applies to every subject.
///
/// # Examples
///
/// ```
/// use score_estimator::calculation::calculate_jee_main_subject_percentile;
/// use rust_decimal::Decimal;
///
/// let result = calculate_jee_main_subject_percentile("Mathematics", 80, 25);
/// assert_eq!(result.percentage, 80);
/// assert_eq!(result.percentile, Decimal::from(5));
/// assert_eq!(result.interpretation, "Mathematics performance: 80% accuracy");
/// ```
pub fn calculate_jee_main_subject_percentile(
    subject: &str,
    score: i64,
    total_questions: i64,
) -> PercentileResult {
    // An overflowing question count is treated like a zero-sized paper.
    let max_score = total_questions
        .checked_mul(Exam::JeeMain.profile().marks_per_question)
        .unwrap_or(0);
    let percentage = percentage_of(score, max_score);

    let percentile = JEE_MAIN_SUBJECT_LADDER
        .iter()
        .find(|(bound, _)| percentage < *bound)
        .map(|(_, percentile)| *percentile)
        .unwrap_or(JEE_MAIN_SUBJECT_TOP);

    debug!(
        subject,
        score,
        max_score,
        percentage,
        percentile = %percentile,
        "JEE Main subject percentile estimated"
    );

    subject_result(subject, score, percentage, percentile)
}

/// Estimates a NEET subject percentile against `max_score`.
///
/// Breakpoints depend on the subject (matched case-insensitively, ignoring
/// surrounding whitespace); unknown subjects use a default ladder.
///
/// # Examples
///
/// ```
/// use score_estimator::calculation::calculate_neet_subject_percentile;
/// use rust_decimal::Decimal;
///
/// let result = calculate_neet_subject_percentile("Physics", 148, 180);
/// assert_eq!(result.percentage, 82);
/// assert_eq!(result.percentile, Decimal::from(20));
/// ```
pub fn calculate_neet_subject_percentile(
    subject: &str,
    score: i64,
    max_score: i64,
) -> PercentileResult {
    let percentage = percentage_of(score, max_score);
    let breakpoints = neet_breakpoints(subject);

    let percentile = breakpoints
        .iter()
        .zip(NEET_SUBJECT_PERCENTILES)
        .find(|(breakpoint, _)| percentage >= **breakpoint)
        .map(|(_, percentile)| percentile)
        .unwrap_or(NEET_SUBJECT_PERCENTILES[4]);

    debug!(
        subject,
        score,
        max_score,
        percentage,
        percentile = %percentile,
        "NEET subject percentile estimated"
    );

    subject_result(subject, score, percentage, percentile)
}
