//! Tile rearrangement game policy
//!
//! Puzzles are permutations of `0..piece_count` over positions. Piece counts
//! climb one tier per solved puzzle and cap at the last tier. A puzzle never
//! starts in the solved order.

use rand::seq::SliceRandom;
use rand::Rng;

/// Piece-count tiers in climbing order
pub const TIERS: [usize; 3] = [6, 8, 10];

/// Session-lived tier tracker, advancing one tier per solve
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleLadder {
    tier: usize,
}

impl PuzzleLadder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Piece count for the next puzzle
    pub fn piece_count(&self) -> usize {
        TIERS[self.tier]
    }

    /// Note a solved puzzle; tier climbs by exactly one, capped at the top
    pub fn record_solved(&mut self) {
        self.tier = (self.tier + 1).min(TIERS.len() - 1);
    }
}

/// Generate a shuffled puzzle that is never already solved.
///
/// If the uniform shuffle lands on the identity permutation it is reversed.
pub fn make_puzzle(piece_count: usize, rng: &mut impl Rng) -> Vec<usize> {
    let mut pieces: Vec<usize> = (0..piece_count).collect();
    pieces.shuffle(rng);
    if is_solved(&pieces) && piece_count > 1 {
        pieces.reverse();
    }
    pieces
}

/// Solved iff every position holds its own index
pub fn is_solved(pieces: &[usize]) -> bool {
    pieces.iter().enumerate().all(|(position, &piece)| position == piece)
}
