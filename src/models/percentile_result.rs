//! Result records returned by the estimator.
//!
//! These are plain values: constructed per call, returned and discarded by
//! the caller. They serialize with camelCase field names because the result
//! pages read them under those names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Five-bucket tagging of a percentage-accuracy value, used for display.
///
/// Each field holds either the percentage (when the percentage falls in that
/// bucket) or 0.
///
/// # Example
///
/// ```
/// use score_estimator::models::ScoreBreakdown;
///
/// let breakdown = ScoreBreakdown {
///     very_good: 82,
///     ..ScoreBreakdown::default()
/// };
/// assert_eq!(breakdown.non_zero_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Percentage of 90 or above.
    pub excellent: i64,
    /// Percentage from 75 to 89.
    pub very_good: i64,
    /// Percentage from 60 to 74.
    pub good: i64,
    /// Percentage from 50 to 59.
    pub average: i64,
    /// Percentage below 50 (always set for subject-level results).
    pub needs_work: i64,
}

impl ScoreBreakdown {
    /// Counts how many buckets carry a non-zero value.
    pub fn non_zero_count(&self) -> usize {
        [
            self.excellent,
            self.very_good,
            self.good,
            self.average,
            self.needs_work,
        ]
        .iter()
        .filter(|value| **value != 0)
        .count()
    }
}

/// The full estimate for one score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentileResult {
    /// The raw score that was estimated.
    pub score: i64,
    /// `round(100 * score / max_score)`.
    pub percentage: i64,
    /// Table-derived standing for the score.
    pub percentile: Decimal,
    /// `round(percentile / 100 * total_candidates)`, 0 for subject results.
    pub rank: u64,
    /// Modelled candidate pool, 0 for subject results.
    pub total_candidates: u64,
    /// Display breakdown of `percentage`.
    pub score_distribution: ScoreBreakdown,
    /// Human-readable summary of the result.
    pub interpretation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> PercentileResult {
        PercentileResult {
            score: 285,
            percentage: 95,
            percentile: Decimal::new(5, 1),
            rank: 4500,
            total_candidates: 900_000,
            score_distribution: ScoreBreakdown {
                excellent: 95,
                ..ScoreBreakdown::default()
            },
            interpretation: "Phenomenal!".to_string(),
        }
    }

    #[test]
    fn test_default_breakdown_is_all_zero() {
        assert_eq!(ScoreBreakdown::default().non_zero_count(), 0);
    }

    #[test]
    fn test_non_zero_count_counts_catch_all() {
        let breakdown = ScoreBreakdown {
            very_good: 82,
            needs_work: 82,
            ..ScoreBreakdown::default()
        };
        assert_eq!(breakdown.non_zero_count(), 2);
    }

    #[test]
    fn test_result_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample_result()).unwrap();

        assert_eq!(json["totalCandidates"], 900_000);
        assert_eq!(json["scoreDistribution"]["excellent"], 95);
        assert_eq!(json["scoreDistribution"]["veryGood"], 0);
        assert_eq!(json["scoreDistribution"]["needsWork"], 0);
        assert_eq!(json["percentile"].as_str().unwrap(), "0.5");
        assert!(json.get("total_candidates").is_none());
    }

    #[test]
    fn test_result_deserialization() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        let parsed: PercentileResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_result());
    }
}
