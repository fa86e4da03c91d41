//! Arithmetic game policy
//!
//! Five stages gated by per-game streak and experience. Stages 0-1 are
//! addition/subtraction with growing magnitude and sign range, stage 2 is
//! multiplication and exact division, stage 3 is one-step linear equations,
//! stage 4 is two-step equations `ax + b = c`. Answers are always integers.

use crate::progress::PerGameProgress;
use rand::Rng;

/// Highest reachable stage
pub const MAX_STAGE: u8 = 4;

// Streak / experience gates per stage, checked top-down
const STAGE_GATES: [(u32, u64); 4] = [(12, 350), (8, 200), (6, 120), (3, 50)];

/// Select the stage for the next question.
///
/// Monotonic in both streak and experience: raising either never lowers the
/// stage.
pub fn stage(progress: &PerGameProgress) -> u8 {
    for (i, &(streak_gate, xp_gate)) in STAGE_GATES.iter().enumerate() {
        if progress.streak >= streak_gate || progress.experience >= xp_gate {
            return MAX_STAGE - i as u8;
        }
    }
    0
}

/// A generated arithmetic question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathQuestion {
    pub prompt: String,
    pub answer: i64,
    pub stage: u8,
}

/// Generate the next question at the stage the progress state selects
pub fn question(progress: &PerGameProgress, rng: &mut impl Rng) -> MathQuestion {
    let stage = stage(progress);
    match stage {
        0 => add_sub(rng, 1, 10, false, stage),
        1 => add_sub(rng, 10, 49, true, stage),
        2 => mul_div(rng, stage),
        3 => one_step_equation(rng, stage),
        _ => two_step_equation(rng, stage),
    }
}

fn add_sub(rng: &mut impl Rng, lo: i64, hi: i64, allow_negative: bool, stage: u8) -> MathQuestion {
    let mut a = rng.gen_range(lo..=hi);
    let mut b = rng.gen_range(lo..=hi);
    if rng.gen_bool(0.5) {
        MathQuestion {
            prompt: format!("{} + {}", a, b),
            answer: a + b,
            stage,
        }
    } else {
        if !allow_negative && b > a {
            std::mem::swap(&mut a, &mut b);
        }
        MathQuestion {
            prompt: format!("{} - {}", a, b),
            answer: a - b,
            stage,
        }
    }
}

fn mul_div(rng: &mut impl Rng, stage: u8) -> MathQuestion {
    let a = rng.gen_range(3..=12);
    let b = rng.gen_range(3..=12);
    if rng.gen_bool(0.5) {
        MathQuestion {
            prompt: format!("{} × {}", a, b),
            answer: a * b,
            stage,
        }
    } else {
        // Exact division: build the dividend from the answer
        MathQuestion {
            prompt: format!("{} ÷ {}", a * b, b),
            answer: a,
            stage,
        }
    }
}

fn one_step_equation(rng: &mut impl Rng, stage: u8) -> MathQuestion {
    if rng.gen_bool(0.5) {
        let x = rng.gen_range(5..=60);
        let a = rng.gen_range(5..=40);
        MathQuestion {
            prompt: format!("x + {} = {}", a, x + a),
            answer: x,
            stage,
        }
    } else {
        let x = rng.gen_range(3..=15);
        let a = rng.gen_range(3..=12);
        MathQuestion {
            prompt: format!("{}x = {}", a, a * x),
            answer: x,
            stage,
        }
    }
}

fn two_step_equation(rng: &mut impl Rng, stage: u8) -> MathQuestion {
    let a = rng.gen_range(2..=12);
    let x = rng.gen_range(2..=20);
    let b = rng.gen_range(1..=30);
    if rng.gen_bool(0.5) {
        MathQuestion {
            prompt: format!("{}x + {} = {}", a, b, a * x + b),
            answer: x,
            stage,
        }
    } else {
        MathQuestion {
            prompt: format!("{}x - {} = {}", a, b, a * x - b),
            answer: x,
            stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn progress(streak: u32, experience: u64) -> PerGameProgress {
        PerGameProgress {
            streak,
            experience,
            last_played: None,
        }
    }

    #[test]
    fn test_stage_thresholds() {
        assert_eq!(stage(&progress(0, 0)), 0);
        assert_eq!(stage(&progress(2, 49)), 0);
        assert_eq!(stage(&progress(3, 0)), 1);
        assert_eq!(stage(&progress(0, 50)), 1);
        assert_eq!(stage(&progress(6, 0)), 2);
        assert_eq!(stage(&progress(0, 120)), 2);
        assert_eq!(stage(&progress(8, 0)), 3);
        assert_eq!(stage(&progress(0, 200)), 3);
        assert_eq!(stage(&progress(12, 0)), 4);
        assert_eq!(stage(&progress(0, 350)), 4);
    }

    #[test]
    fn test_default_progress_is_stage_zero() {
        assert_eq!(stage(&PerGameProgress::default()), 0);
    }

    #[test]
    fn test_answers_are_consistent_with_prompts() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let q = question(&progress(0, 0), &mut rng);
            // Stage 0: "a + b" or "a - b", never negative
            assert!(q.answer >= 0, "stage 0 answer went negative: {}", q.prompt);
        }
    }

    #[test]
    fn test_division_is_exact() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let q = question(&progress(6, 0), &mut rng);
            assert_eq!(q.stage, 2);
            if let Some((lhs, rhs)) = q.prompt.split_once(" ÷ ") {
                let dividend: i64 = lhs.parse().unwrap();
                let divisor: i64 = rhs.parse().unwrap();
                assert_eq!(dividend % divisor, 0);
                assert_eq!(dividend / divisor, q.answer);
            }
        }
    }

    #[test]
    fn test_equation_stages_tagged() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(question(&progress(8, 0), &mut rng).stage, 3);
        assert_eq!(question(&progress(12, 0), &mut rng).stage, 4);
    }

    proptest! {
        /// Raising streak or experience never lowers the stage
        #[test]
        fn prop_stage_monotonic(streak in 0u32..40, xp in 0u64..600) {
            let base = stage(&progress(streak, xp));
            prop_assert!(stage(&progress(streak + 1, xp)) >= base);
            prop_assert!(stage(&progress(streak, xp + 25)) >= base);
        }

        /// No progress state produces an out-of-range stage
        #[test]
        fn prop_stage_in_range(streak in any::<u32>(), xp in any::<u64>()) {
            prop_assert!(stage(&progress(streak, xp)) <= MAX_STAGE);
        }
    }
}
