//! Word unscrambling game policy
//!
//! The word pool starts narrow (five letters or fewer) and widens to six
//! letters after three correct answers in the session. Widening is monotonic
//! within a session. Scrambles always differ from the source word whenever a
//! different permutation exists.

use rand::seq::SliceRandom;
use rand::Rng;

/// Word length ceiling before the pool widens
pub const NARROW_MAX_LEN: usize = 5;
/// Word length ceiling after widening
pub const WIDE_MAX_LEN: usize = 6;
/// Session corrects required to widen the pool
pub const WIDEN_AFTER_CORRECT: u32 = 3;

const SCRAMBLE_ATTEMPTS: usize = 16;

const WORDS: &[&str] = &[
    "cat", "sun", "map", "ice", "owl", "gem", "fox", "sky",
    "tree", "lamp", "frog", "milk", "sand", "wolf", "ring", "bell",
    "apple", "chair", "grape", "mouse", "plant", "stone", "cloud", "tiger",
    "orange", "silver", "garden", "rocket", "window", "bridge", "candle", "forest",
];

/// A word and its scrambled presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramChallenge {
    pub word: &'static str,
    pub scrambled: String,
}

/// Session-lived pool that widens as the player answers correctly
#[derive(Debug, Clone, Copy, Default)]
pub struct AnagramPool {
    session_correct: u32,
}

impl AnagramPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current word length ceiling
    pub fn max_len(&self) -> usize {
        if self.session_correct < WIDEN_AFTER_CORRECT {
            NARROW_MAX_LEN
        } else {
            WIDE_MAX_LEN
        }
    }

    /// Note a correct answer; the pool never narrows back within a session
    pub fn record_correct(&mut self) {
        self.session_correct += 1;
    }

    /// Draw the next challenge from the currently eligible words
    pub fn pick(&self, rng: &mut impl Rng) -> AnagramChallenge {
        let max_len = self.max_len();
        let eligible: Vec<&'static str> = WORDS
            .iter()
            .copied()
            .filter(|w| w.len() <= max_len)
            .collect();
        let word = eligible.choose(rng).copied().unwrap_or(WORDS[0]);
        AnagramChallenge {
            word,
            scrambled: scramble(word, rng),
        }
    }
}

/// Shuffle the word's letters, guaranteeing a different arrangement whenever
/// one exists.
///
/// Words whose letters are all identical have a single permutation and are
/// returned as-is. Otherwise a bounded reshuffle runs, with a rotation as the
/// final guard (a rotation of a word with at least two distinct letters and
/// no period-1 repetition always differs).
pub fn scramble(word: &str, rng: &mut impl Rng) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    let single_permutation = letters.windows(2).all(|w| w[0] == w[1]);
    if single_permutation {
        return word.to_string();
    }

    for _ in 0..SCRAMBLE_ATTEMPTS {
        letters.shuffle(rng);
        let candidate: String = letters.iter().collect();
        if candidate != word {
            return candidate;
        }
    }

    letters.rotate_left(1);
    letters.iter().collect()
}

/// Case-insensitive, whitespace-trimmed answer comparison
pub fn answer_matches(guess: &str, word: &str) -> bool {
    guess.trim().eq_ignore_ascii_case(word.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_pool_starts_narrow() {
        let pool = AnagramPool::new();
        assert_eq!(pool.max_len(), NARROW_MAX_LEN);

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let challenge = pool.pick(&mut rng);
            assert!(challenge.word.len() <= NARROW_MAX_LEN);
        }
    }

    #[test]
    fn test_pool_widens_after_three_correct() {
        let mut pool = AnagramPool::new();
        pool.record_correct();
        pool.record_correct();
        assert_eq!(pool.max_len(), NARROW_MAX_LEN);
        pool.record_correct();
        assert_eq!(pool.max_len(), WIDE_MAX_LEN);
        // Monotonic: further corrects never narrow
        pool.record_correct();
        assert_eq!(pool.max_len(), WIDE_MAX_LEN);
    }

    #[test]
    fn test_scramble_differs_from_word() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for word in WORDS {
            for _ in 0..20 {
                let scrambled = scramble(word, &mut rng);
                assert_ne!(&scrambled, word, "scramble returned the original: {}", word);
                let mut a: Vec<char> = scrambled.chars().collect();
                let mut b: Vec<char> = word.chars().collect();
                a.sort_unstable();
                b.sort_unstable();
                assert_eq!(a, b, "scramble changed the letters of {}", word);
            }
        }
    }

    #[test]
    fn test_scramble_uniform_word_unchanged() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(scramble("aaa", &mut rng), "aaa");
    }

    #[test]
    fn test_answer_matching() {
        assert!(answer_matches(" Tree ", "tree"));
        assert!(answer_matches("TREE", "tree"));
        assert!(!answer_matches("trees", "tree"));
        assert!(!answer_matches("", "tree"));
    }

    proptest! {
        /// Scrambles of two-distinct-letter words never equal the source
        #[test]
        fn prop_scramble_never_identity(seed in any::<u64>(), idx in 0usize..32) {
            let word = WORDS[idx];
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            prop_assert_ne!(scramble(word, &mut rng), word);
        }
    }
}
