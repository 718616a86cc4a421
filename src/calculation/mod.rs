//! Score estimation logic.
//!
//! This module contains the pure estimators: full-exam percentile lookup
//! over fixed band tables, subject-level accuracy ladders, narrative
//! interpretation, score-band breakdowns and admission-category estimation.
//! Nothing here holds state or fails; every input maps to a defined result.

mod band_table;
mod breakdown;
mod category;
mod full_exam;
mod interpretation;
mod rounding;
mod subject;

pub use band_table::{BandTable, ScoreRange};
pub use breakdown::{full_exam_breakdown, subject_breakdown};
pub use category::estimate_college_category;
pub use full_exam::{JEE_MAIN_BANDS, NEET_BANDS, calculate_full_exam_percentile};
pub use interpretation::interpret;
pub use rounding::{estimate_rank, percentage_of, round_half_up};
pub use subject::{calculate_jee_main_subject_percentile, calculate_neet_subject_percentile};
