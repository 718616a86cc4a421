//! Score-to-percentile band tables.
//!
//! A band table is an ordered list of inclusive score ranges, each mapped to
//! a fixed percentile. Lookups scan top-down and the first containing band
//! wins, so a well-formed table must partition `[0, max_score]` exactly.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::Exam;

/// One row of a band table: `[min_score, max_score] -> percentile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRange {
    /// Lowest score in the band (inclusive).
    pub min_score: i64,
    /// Highest score in the band (inclusive).
    pub max_score: i64,
    /// Percentile reported for any score in the band.
    pub percentile: Decimal,
}

impl ScoreRange {
    /// Creates a band whose percentile is `mantissa * 10^-scale`.
    pub const fn new(min_score: i64, max_score: i64, mantissa: u32, scale: u32) -> Self {
        Self {
            min_score,
            max_score,
            percentile: Decimal::from_parts(mantissa, 0, 0, false, scale),
        }
    }

    /// Returns true if `score` lies within the inclusive bounds.
    pub fn contains(&self, score: i64) -> bool {
        self.min_score <= score && score <= self.max_score
    }
}

/// An exam's ordered band table.
///
/// # Example
///
/// ```
/// use score_estimator::calculation::BandTable;
/// use score_estimator::models::Exam;
/// use rust_decimal::Decimal;
///
/// let table = BandTable::for_exam(Exam::JeeMain);
/// assert!(table.validate().is_ok());
/// assert_eq!(table.percentile_for(285), Decimal::new(5, 1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BandTable<'a> {
    exam: Exam,
    bands: &'a [ScoreRange],
}

impl<'a> BandTable<'a> {
    /// Wraps an arbitrary list of bands for `exam`.
    pub fn new(exam: Exam, bands: &'a [ScoreRange]) -> Self {
        Self { exam, bands }
    }

    /// The exam this table scores.
    pub fn exam(&self) -> Exam {
        self.exam
    }

    /// The bands in lookup order.
    pub fn bands(&self) -> &'a [ScoreRange] {
        self.bands
    }

    /// Returns the first band containing `score`, if any.
    pub fn find(&self, score: i64) -> Option<&'a ScoreRange> {
        self.bands.iter().find(|band| band.contains(score))
    }

    /// Returns the percentile for `score`, falling back to the exam's
    /// default when no band matches.
    pub fn percentile_for(&self, score: i64) -> Decimal {
        self.find(score)
            .map(|band| band.percentile)
            .unwrap_or(self.exam.profile().default_percentile)
    }

    /// Checks that the bands partition `[0, max_score]` with no gaps and no
    /// overlaps.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBandTable`] describing the first
    /// problem found.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidBandTable {
            exam: self.exam,
            message,
        };

        let mut sorted: Vec<&ScoreRange> = self.bands.iter().collect();
        sorted.sort_by_key(|band| band.min_score);

        if let Some(band) = sorted.iter().find(|band| band.min_score > band.max_score) {
            return Err(invalid(format!(
                "band [{}, {}] is empty",
                band.min_score, band.max_score
            )));
        }

        let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
            return Err(invalid("table has no bands".to_string()));
        };

        if first.min_score != 0 {
            return Err(invalid(format!(
                "lowest band starts at {}, expected 0",
                first.min_score
            )));
        }

        let max_score = self.exam.profile().max_score;
        if last.max_score != max_score {
            return Err(invalid(format!(
                "highest band ends at {}, expected {}",
                last.max_score, max_score
            )));
        }

        for pair in sorted.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            if upper.min_score <= lower.max_score {
                return Err(invalid(format!(
                    "bands [{}, {}] and [{}, {}] overlap",
                    lower.min_score, lower.max_score, upper.min_score, upper.max_score
                )));
            }
            if upper.min_score > lower.max_score.saturating_add(1) {
                return Err(invalid(format!(
                    "gap between {} and {}",
                    lower.max_score, upper.min_score
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOY_BANDS: [ScoreRange; 3] = [
        ScoreRange::new(200, 300, 1, 0),
        ScoreRange::new(100, 199, 50, 0),
        ScoreRange::new(0, 99, 100, 0),
    ];

    fn assert_invalid(bands: &[ScoreRange], expected: &str) {
        match BandTable::new(Exam::JeeMain, bands).validate() {
            Err(EngineError::InvalidBandTable { exam, message }) => {
                assert_eq!(exam, Exam::JeeMain);
                assert!(
                    message.contains(expected),
                    "Expected message containing '{}', got '{}'",
                    expected,
                    message
                );
            }
            other => panic!("Expected InvalidBandTable, got {:?}", other),
        }
    }

    #[test]
    fn test_score_range_bounds_are_inclusive() {
        let band = ScoreRange::new(10, 20, 5, 1);
        assert!(band.contains(10));
        assert!(band.contains(20));
        assert!(!band.contains(9));
        assert!(!band.contains(21));
        assert_eq!(band.percentile, Decimal::new(5, 1));
    }

    #[test]
    fn test_find_returns_first_matching_band() {
        let table = BandTable::new(Exam::JeeMain, &TOY_BANDS);
        assert_eq!(table.find(250).unwrap().percentile, Decimal::ONE);
        assert_eq!(table.find(100).unwrap().percentile, Decimal::from(50));
        assert!(table.find(301).is_none());
    }

    /// Overlapping rows resolve to whichever comes first in the table.
    #[test]
    fn test_find_prefers_earlier_band_on_overlap() {
        let bands = [ScoreRange::new(0, 300, 7, 0), ScoreRange::new(0, 300, 9, 0)];
        let table = BandTable::new(Exam::JeeMain, &bands);
        assert_eq!(table.percentile_for(150), Decimal::from(7));
    }

    #[test]
    fn test_percentile_for_falls_back_to_exam_default() {
        let jee = BandTable::new(Exam::JeeMain, &TOY_BANDS);
        let neet = BandTable::new(Exam::Neet, &TOY_BANDS);

        assert_eq!(jee.percentile_for(-1), Decimal::ONE_HUNDRED);
        assert_eq!(neet.percentile_for(-1), Decimal::ZERO);
    }

    #[test]
    fn test_validate_accepts_partition() {
        assert!(BandTable::new(Exam::JeeMain, &TOY_BANDS).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_gap() {
        let bands = [ScoreRange::new(101, 300, 1, 0), ScoreRange::new(0, 99, 100, 0)];
        assert_invalid(&bands, "gap between 99 and 101");
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let bands = [ScoreRange::new(99, 300, 1, 0), ScoreRange::new(0, 99, 100, 0)];
        assert_invalid(&bands, "overlap");
    }

    #[test]
    fn test_validate_rejects_short_coverage() {
        let bands = [ScoreRange::new(0, 290, 1, 0)];
        assert_invalid(&bands, "expected 300");

        let bands = [ScoreRange::new(5, 300, 1, 0)];
        assert_invalid(&bands, "expected 0");
    }

    #[test]
    fn test_validate_rejects_empty_band() {
        let bands = [ScoreRange::new(0, 300, 1, 0), ScoreRange::new(50, 40, 1, 0)];
        assert_invalid(&bands, "is empty");
    }

    #[test]
    fn test_validate_rejects_empty_table() {
        assert_invalid(&[], "no bands");
    }
}
