//! Narrative interpretation of a full-exam percentile.
//!
//! The narrative bands are independent of the score band tables and use
//! their own cut points. Both exams read the percentile as "top X % of
//! candidates": the first band whose threshold is at or above the
//! percentile wins.

use rust_decimal::Decimal;

use crate::models::Exam;

/// One narrative band; `{score}` is replaced by `<score>/<max_score>`.
struct Narrative {
    up_to: Decimal,
    template: &'static str,
}

const fn pct(mantissa: u32, scale: u32) -> Decimal {
    Decimal::from_parts(mantissa, 0, 0, false, scale)
}

const JEE_MAIN_NARRATIVES: [Narrative; 5] = [
    Narrative {
        up_to: pct(1, 0),
        template: "Phenomenal! A score of {score} places you in the top 1% of candidates. \
                   IIT Bombay, IIT Delhi and IIT Madras computer science are realistic targets.",
    },
    Narrative {
        up_to: pct(5, 0),
        template: "Excellent! A score of {score} places you in the top 5% of candidates. \
                   Older IITs such as IIT Kharagpur and IIT Roorkee, and NIT Trichy, are within reach.",
    },
    Narrative {
        up_to: pct(10, 0),
        template: "Very good! A score of {score} places you in the top 10% of candidates. \
                   NIT Surathkal, NIT Warangal and IIIT Hyderabad are strong options.",
    },
    Narrative {
        up_to: pct(25, 0),
        template: "Good effort! A score of {score} places you in the top 25% of candidates. \
                   Newer NITs, IIITs and leading state engineering colleges are good targets.",
    },
    Narrative {
        up_to: pct(50, 0),
        template: "Fair performance. A score of {score} places you in the top half of candidates. \
                   Consider state government colleges and private institutes such as VIT, SRM and Manipal.",
    },
];

const JEE_MAIN_FALLBACK: &str = "Keep going! A score of {score} shows plenty of room to grow. \
                                 Strengthen fundamentals and take regular mocks to move into the NIT range.";

const NEET_NARRATIVES: [Narrative; 6] = [
    Narrative {
        up_to: pct(5, 1),
        template: "Outstanding! A score of {score} places you among the very best candidates. \
                   AIIMS New Delhi, JIPMER and MAMC Delhi are realistic targets.",
    },
    Narrative {
        up_to: pct(2, 0),
        template: "Excellent! A score of {score} places you in the top 2% of candidates. \
                   Top government medical colleges such as VMMC, UCMS and KGMU are within reach.",
    },
    Narrative {
        up_to: pct(5, 0),
        template: "Very good! A score of {score} places you in the top 5% of candidates. \
                   AFMC and leading state government medical colleges are strong options.",
    },
    Narrative {
        up_to: pct(10, 0),
        template: "Good! A score of {score} places you in the top 10% of candidates. \
                   Government medical colleges in most states and CMC Vellore or KMC Manipal are good targets.",
    },
    Narrative {
        up_to: pct(25, 0),
        template: "Fair performance. A score of {score} places you in the top 25% of candidates. \
                   Private medical colleges and deemed universities are realistic options.",
    },
    Narrative {
        up_to: pct(50, 0),
        template: "Average performance. A score of {score} places you in the top half of candidates. \
                   Deemed universities and BDS programs are worth considering.",
    },
];

const NEET_FALLBACK: &str = "Keep going! A score of {score} shows plenty of room to grow. \
                             Biology carries half the marks, so strengthening it moves you up fastest.";

/// Selects the narrative for `percentile` and embeds `score` in it.
///
/// # Examples
///
/// ```
/// use score_estimator::calculation::interpret;
/// use score_estimator::models::Exam;
/// use rust_decimal::Decimal;
///
/// let text = interpret(Exam::JeeMain, 285, Decimal::new(5, 1));
/// assert!(text.starts_with("Phenomenal!"));
/// assert!(text.contains("285/300"));
/// ```
pub fn interpret(exam: Exam, score: i64, percentile: Decimal) -> String {
    let (narratives, fallback): (&[Narrative], &str) = match exam {
        Exam::JeeMain => (&JEE_MAIN_NARRATIVES[..], JEE_MAIN_FALLBACK),
        Exam::Neet => (&NEET_NARRATIVES[..], NEET_FALLBACK),
    };

    let template = narratives
        .iter()
        .find(|narrative| percentile <= narrative.up_to)
        .map(|narrative| narrative.template)
        .unwrap_or(fallback);

    let score_text = format!("{}/{}", score, exam.profile().max_score);
    template.replace("{score}", &score_text)
}
