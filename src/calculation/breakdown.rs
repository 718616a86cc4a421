//! Five-bucket score breakdowns.

use crate::models::ScoreBreakdown;

/// Tags `percentage` with exactly one bucket; the others are 0.
///
/// | Range  | Bucket      |
/// |--------|-------------|
/// | >= 90  | excellent   |
/// | 75-89  | very_good   |
/// | 60-74  | good        |
/// | 50-59  | average     |
/// | < 50   | needs_work  |
pub fn full_exam_breakdown(percentage: i64) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();
    match percentage {
        p if p >= 90 => breakdown.excellent = p,
        p if p >= 75 => breakdown.very_good = p,
        p if p >= 60 => breakdown.good = p,
        p if p >= 50 => breakdown.average = p,
        p => breakdown.needs_work = p,
    }
    breakdown
}

/// Subject-level breakdown.
///
/// The first four buckets use the same thresholds as
/// [`full_exam_breakdown`], but `needs_work` always carries the percentage,
/// so a result above 50 has two non-zero buckets.
pub fn subject_breakdown(percentage: i64) -> ScoreBreakdown {
    let mut breakdown = full_exam_breakdown(percentage);
    breakdown.needs_work = percentage;
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_exam_breakdown_boundaries() {
        assert_eq!(full_exam_breakdown(100).excellent, 100);
        assert_eq!(full_exam_breakdown(90).excellent, 90);
        assert_eq!(full_exam_breakdown(89).very_good, 89);
        assert_eq!(full_exam_breakdown(75).very_good, 75);
        assert_eq!(full_exam_breakdown(74).good, 74);
        assert_eq!(full_exam_breakdown(60).good, 60);
        assert_eq!(full_exam_breakdown(59).average, 59);
        assert_eq!(full_exam_breakdown(50).average, 50);
        assert_eq!(full_exam_breakdown(49).needs_work, 49);
    }

    #[test]
    fn test_full_exam_breakdown_sets_one_bucket() {
        for percentage in 1..=100 {
            assert_eq!(
                full_exam_breakdown(percentage).non_zero_count(),
                1,
                "percentage {}",
                percentage
            );
        }
    }

    #[test]
    fn test_full_exam_breakdown_zero_is_all_zero() {
        assert_eq!(full_exam_breakdown(0), ScoreBreakdown::default());
    }

    #[test]
    fn test_full_exam_breakdown_negative_goes_to_needs_work() {
        assert_eq!(full_exam_breakdown(-10).needs_work, -10);
    }

    /// Captures current behaviour: needs_work is a catch-all for subjects.
    #[test]
    fn test_subject_breakdown_always_sets_needs_work() {
        let breakdown = subject_breakdown(82);
        assert_eq!(
            breakdown,
            ScoreBreakdown {
                excellent: 0,
                very_good: 82,
                good: 0,
                average: 0,
                needs_work: 82,
            }
        );
    }

    #[test]
    fn test_subject_breakdown_below_fifty_has_one_bucket() {
        let breakdown = subject_breakdown(30);
        assert_eq!(breakdown.needs_work, 30);
        assert_eq!(breakdown.non_zero_count(), 1);
    }
}
