//! Rounding helpers shared by every estimator.
//!
//! All arithmetic is done on exact decimals. Rounding is half-up: a value
//! exactly halfway between two integers goes to the larger one, so `82.5`
//! becomes `83` and `-0.5` becomes `0`.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Rounds to the nearest integer, ties toward positive infinity.
pub fn round_half_up(value: Decimal) -> Decimal {
    (value + HALF).floor()
}

/// Computes `round(100 * score / max_score)`.
///
/// A `max_score` of zero yields 0 rather than dividing by zero. Scores are
/// not clamped, so out-of-range scores give percentages outside `0..=100`.
///
/// # Examples
///
/// ```
/// use score_estimator::calculation::percentage_of;
///
/// assert_eq!(percentage_of(285, 300), 95);
/// assert_eq!(percentage_of(148, 180), 82);
/// assert_eq!(percentage_of(5, 0), 0);
/// ```
pub fn percentage_of(score: i64, max_score: i64) -> i64 {
    let ratio = (Decimal::from(score) * Decimal::ONE_HUNDRED).checked_div(Decimal::from(max_score));

    ratio
        .map(round_half_up)
        .and_then(|rounded| rounded.to_i64())
        .unwrap_or(0)
}

/// Computes `round(percentile / 100 * total_candidates)`.
///
/// # Examples
///
/// ```
/// use score_estimator::calculation::estimate_rank;
/// use rust_decimal::Decimal;
///
/// assert_eq!(estimate_rank(Decimal::new(5, 1), 900_000), 4500);
/// assert_eq!(estimate_rank(Decimal::new(5, 1), 1_600_000), 8000);
/// ```
pub fn estimate_rank(percentile: Decimal, total_candidates: u64) -> u64 {
    let share = percentile / Decimal::ONE_HUNDRED * Decimal::from(total_candidates);
    round_half_up(share).to_u64().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_half_up_on_ties() {
        assert_eq!(round_half_up(dec("82.5")), dec("83"));
        assert_eq!(round_half_up(dec("0.5")), dec("1"));
        assert_eq!(round_half_up(dec("-0.5")), dec("0"));
        assert_eq!(round_half_up(dec("-1.5")), dec("-1"));
    }

    #[test]
    fn test_round_half_up_off_ties() {
        assert_eq!(round_half_up(dec("82.49")), dec("82"));
        assert_eq!(round_half_up(dec("97.2222")), dec("97"));
        assert_eq!(round_half_up(dec("-2.6")), dec("-3"));
    }

    #[test]
    fn test_percentage_of_full_marks() {
        assert_eq!(percentage_of(300, 300), 100);
        assert_eq!(percentage_of(720, 720), 100);
    }

    #[test]
    fn test_percentage_of_rounds_half_up() {
        // 100 * 33 / 40 = 82.5
        assert_eq!(percentage_of(33, 40), 83);
        // 100 * 700 / 720 = 97.22...
        assert_eq!(percentage_of(700, 720), 97);
    }

    #[test]
    fn test_percentage_of_is_not_clamped() {
        assert_eq!(percentage_of(-30, 300), -10);
        assert_eq!(percentage_of(330, 300), 110);
    }

    #[test]
    fn test_percentage_of_zero_max_is_zero() {
        assert_eq!(percentage_of(12, 0), 0);
        assert_eq!(percentage_of(0, 0), 0);
    }

    #[test]
    fn test_estimate_rank_whole_percentiles() {
        assert_eq!(estimate_rank(dec("100"), 900_000), 900_000);
        assert_eq!(estimate_rank(dec("0"), 900_000), 0);
        assert_eq!(estimate_rank(dec("0.1"), 900_000), 900);
    }

    #[test]
    fn test_estimate_rank_fractional_percentile() {
        assert_eq!(estimate_rank(dec("2.5"), 1_600_000), 40_000);
    }
}
