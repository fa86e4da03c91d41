//! Numeric pattern game policy
//!
//! Arithmetic progressions with a step from a small fixed set. Five terms
//! are shown; the answer is the sixth. Difficulty is deliberately flat.

use rand::Rng;

/// Steps the progression may use
pub const STEPS: [i64; 5] = [2, 3, 4, 5, 7];
/// Terms shown to the player
pub const VISIBLE_TERMS: usize = 5;

const START_MIN: i64 = 1;
const START_MAX: i64 = 20;

/// A generated pattern question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternQuestion {
    pub terms: [i64; VISIBLE_TERMS],
    pub step: i64,
    pub answer: i64,
}

/// Generate the next pattern question
pub fn question(rng: &mut impl Rng) -> PatternQuestion {
    let step = STEPS[rng.gen_range(0..STEPS.len())];
    let start = rng.gen_range(START_MIN..=START_MAX);

    let mut terms = [0i64; VISIBLE_TERMS];
    for (i, term) in terms.iter_mut().enumerate() {
        *term = start + step * i as i64;
    }

    PatternQuestion {
        terms,
        step,
        answer: start + step * VISIBLE_TERMS as i64,
    }
}
