//! Adaptive difficulty policies, one per game
//!
//! Each policy is a pure mapping from a game's progress state to the next
//! question's parameters, deterministic except for content drawn uniformly
//! within the selected band. All policies are total: missing or malformed
//! progress substitutes zero defaults, and no policy produces an
//! out-of-range tier. Randomness is always injected as `&mut impl Rng`.

pub mod anagram;
pub mod math;
pub mod pattern;
pub mod puzzle;
pub mod recall;

pub use anagram::{AnagramChallenge, AnagramPool};
pub use math::MathQuestion;
pub use pattern::PatternQuestion;
pub use puzzle::PuzzleLadder;
pub use recall::{Color, RecallPlan, RecallRound, RevealGate};
