//! Sequence recall game policy
//!
//! Sequence length scales with streak and round parity. Each round shows a
//! fresh random color sequence which must stay revealed for a minimum
//! duration before input is accepted.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed color palette sequences are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    pub const PALETTE: [Color; 6] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];
}

/// Floor of the reveal duration in milliseconds
pub const MIN_REVEAL_MILLIS: u64 = 3000;
/// Additional reveal time per sequence element
pub const REVEAL_MILLIS_PER_ITEM: u64 = 500;

/// Length of the next sequence for a given streak and round number
pub fn sequence_length(streak: u32, round: u32) -> usize {
    if streak < 6 {
        3
    } else if streak < 12 {
        if round % 2 == 0 {
            4
        } else {
            5
        }
    } else {
        (6 + (streak - 12) as usize / 3).clamp(6, 10)
    }
}

/// Minimum time the sequence must stay revealed before input is accepted
pub fn reveal_millis(length: usize) -> u64 {
    (length as u64 * REVEAL_MILLIS_PER_ITEM).max(MIN_REVEAL_MILLIS)
}

/// Draw a fresh sequence uniformly from the palette
pub fn sequence(length: usize, rng: &mut impl Rng) -> Vec<Color> {
    (0..length)
        .map(|_| Color::PALETTE[rng.gen_range(0..Color::PALETTE.len())])
        .collect()
}

/// Parameters for one recall round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecallPlan {
    pub sequence: Vec<Color>,
    pub reveal_millis: u64,
}

/// Session-lived round counter.
///
/// Advances on a correct reproduction, falls back one round (floor 1) on a
/// miss. The streak itself lives in the per-game progress book; it is passed
/// in when planning the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecallRound {
    round: u32,
}

impl RecallRound {
    pub fn new() -> Self {
        Self { round: 1 }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Correct reproduction: move to the next round
    pub fn advance(&mut self) {
        self.round += 1;
    }

    /// Miss: drop back one round, never below 1
    pub fn regress(&mut self) {
        self.round = self.round.saturating_sub(1).max(1);
    }

    /// Generate the next round's sequence and reveal duration
    pub fn plan(&self, streak: u32, rng: &mut impl Rng) -> RecallPlan {
        let length = sequence_length(streak, self.round);
        RecallPlan {
            sequence: sequence(length, rng),
            reveal_millis: reveal_millis(length),
        }
    }
}

impl Default for RecallRound {
    fn default() -> Self {
        Self::new()
    }
}

/// Gate rejecting input while the sequence is still being revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealGate {
    required_millis: u64,
}

impl RevealGate {
    pub fn for_length(length: usize) -> Self {
        Self {
            required_millis: reveal_millis(length),
        }
    }

    pub fn required_millis(&self) -> u64 {
        self.required_millis
    }

    /// Input is accepted once the reveal duration has fully elapsed
    pub fn accepts_input(&self, elapsed_millis: u64) -> bool {
        elapsed_millis >= self.required_millis
    }
}
