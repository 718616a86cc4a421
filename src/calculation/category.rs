//! Admission-category estimation from a percentile.
//!
//! The two ladders read percentiles in opposite directions. JEE Main
//! treats the percentile as "top X %", so smaller is better. NEET treats
//! it as a conventional percentile, so larger is better. At an exact
//! threshold the more prestigious rung is selected.

use rust_decimal::Decimal;

use crate::models::Exam;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

struct CategoryLadder {
    direction: Direction,
    rungs: &'static [(Decimal, &'static [&'static str])],
    fallback: &'static [&'static str],
}

const fn pct(mantissa: u32, scale: u32) -> Decimal {
    Decimal::from_parts(mantissa, 0, 0, false, scale)
}

const JEE_MAIN_LADDER: CategoryLadder = CategoryLadder {
    direction: Direction::LowerIsBetter,
    rungs: &[
        (pct(1, 1), &["IIT Bombay", "IIT Delhi", "IIT Madras", "IIT Kanpur"]),
        (pct(1, 0), &["Top IITs", "Top NITs", "IIIT Hyderabad"]),
        (pct(5, 0), &["Older IITs", "Top NITs", "Top IIITs"]),
        (pct(10, 0), &["Newer IITs", "NITs", "IIITs"]),
        (pct(25, 0), &["NITs", "IIITs", "State Government Colleges"]),
        (pct(50, 0), &["State Government Colleges", "Top Private Colleges"]),
    ],
    fallback: &["Private Engineering Colleges"],
};

const NEET_LADDER: CategoryLadder = CategoryLadder {
    direction: Direction::HigherIsBetter,
    rungs: &[
        (
            pct(995, 1),
            &["AIIMS", "Top Government Medical Colleges", "Premium Private Colleges"],
        ),
        (pct(98, 0), &["Top Government Medical Colleges", "Premium Private Colleges"]),
        (pct(95, 0), &["Government Medical Colleges", "Premium Private Colleges"]),
        (pct(90, 0), &["State Government Medical Colleges", "Private Medical Colleges"]),
        (pct(80, 0), &["Private Medical Colleges", "Deemed Universities"]),
    ],
    fallback: &["Deemed Universities", "BDS Programs", "AYUSH Programs"],
};

impl CategoryLadder {
    fn select(&self, percentile: Decimal) -> &'static [&'static str] {
        self.rungs
            .iter()
            .find(|(threshold, _)| match self.direction {
                Direction::LowerIsBetter => percentile <= *threshold,
                Direction::HigherIsBetter => percentile >= *threshold,
            })
            .map(|(_, categories)| *categories)
            .unwrap_or(self.fallback)
    }
}

/// Estimates plausible admission categories for `percentile`, most
/// prestigious first.
///
/// Never returns an empty list.
///
/// # Examples
///
/// ```
/// use score_estimator::calculation::estimate_college_category;
/// use score_estimator::models::Exam;
/// use rust_decimal::Decimal;
///
/// let categories = estimate_college_category(Exam::Neet, Decimal::new(995, 1));
/// assert_eq!(
///     categories,
///     ["AIIMS", "Top Government Medical Colleges", "Premium Private Colleges"]
/// );
/// ```
pub fn estimate_college_category(exam: Exam, percentile: Decimal) -> &'static [&'static str] {
    let ladder = match exam {
        Exam::JeeMain => &JEE_MAIN_LADDER,
        Exam::Neet => &NEET_LADDER,
    };
    ladder.select(percentile)
}
