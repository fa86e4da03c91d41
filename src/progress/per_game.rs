//! Per-game progress book
//!
//! One entry per game kind, fully independent: performance in one game never
//! moves the difficulty of another. Experience is monotonic within a day and
//! capped; streak is the count of trailing consecutive correct answers.

use crate::core::GameKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Experience ceiling per game
pub const EXPERIENCE_CAP: u64 = 1_000_000;

/// Progress snapshot for a single game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerGameProgress {
    #[serde(default)]
    pub experience: u64,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub last_played: Option<NaiveDate>,
}

/// All per-game progress entries, keyed by game kind.
///
/// Serializes as the bare game-to-progress map, the shape the persisted
/// `arcade.progress` entry carries.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ProgressBook {
    games: HashMap<GameKind, PerGameProgress>,
}

impl ProgressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot, zero-valued if the game was never played
    pub fn get(&self, game: GameKind) -> PerGameProgress {
        self.games.get(&game).copied().unwrap_or_default()
    }

    /// Apply a correct answer: clamped experience gain, streak +1.
    ///
    /// Negative point deltas are treated as zero so experience never
    /// decreases.
    pub fn record_correct(&mut self, game: GameKind, points: i64, today: NaiveDate) {
        let entry = self.games.entry(game).or_default();
        let gained = points.max(0) as u64;
        entry.experience = entry.experience.saturating_add(gained).min(EXPERIENCE_CAP);
        entry.streak += 1;
        entry.last_played = Some(today);
    }

    /// Apply a miss: streak resets, everything else untouched.
    pub fn record_miss(&mut self, game: GameKind) {
        let entry = self.games.entry(game).or_default();
        entry.streak = 0;
    }

    /// Lifetime experience summed across all games
    pub fn total_experience(&self) -> u64 {
        self.games.values().map(|p| p.experience).sum()
    }

    /// Rebuild from a persisted JSON value, skipping malformed entries.
    ///
    /// Each game key and each field is recovered independently: an unknown
    /// game tag or a wrong-typed field drops that piece only.
    pub fn from_value(value: Option<Value>) -> Self {
        let mut book = Self::new();
        let Some(Value::Object(map)) = value else {
            return book;
        };
        for (tag, entry) in map {
            let Some(game) = GameKind::parse(&tag) else {
                continue;
            };
            let progress = PerGameProgress {
                experience: entry
                    .get("experience")
                    .and_then(Value::as_u64)
                    .unwrap_or(0)
                    .min(EXPERIENCE_CAP),
                streak: entry
                    .get("streak")
                    .and_then(Value::as_u64)
                    .map(|s| s.min(u32::MAX as u64) as u32)
                    .unwrap_or(0),
                last_played: entry
                    .get("last_played")
                    .and_then(Value::as_str)
                    .and_then(|s| s.parse().ok()),
            };
            book.games.insert(game, progress);
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_untracked_game_is_zeroed() {
        let book = ProgressBook::new();
        assert_eq!(book.get(GameKind::Math), PerGameProgress::default());
    }

    #[test]
    fn test_correct_updates_all_fields() {
        let mut book = ProgressBook::new();
        let today = day("2024-03-01");
        book.record_correct(GameKind::Math, 10, today);
        book.record_correct(GameKind::Math, 15, today);

        let p = book.get(GameKind::Math);
        assert_eq!(p.experience, 25);
        assert_eq!(p.streak, 2);
        assert_eq!(p.last_played, Some(today));
    }

    #[test]
    fn test_miss_resets_streak_only() {
        let mut book = ProgressBook::new();
        let today = day("2024-03-01");
        book.record_correct(GameKind::Math, 10, today);
        book.record_miss(GameKind::Math);

        let p = book.get(GameKind::Math);
        assert_eq!(p.streak, 0);
        assert_eq!(p.experience, 10);
        assert_eq!(p.last_played, Some(today));
    }

    #[test]
    fn test_games_are_independent() {
        let mut book = ProgressBook::new();
        let today = day("2024-03-01");
        book.record_correct(GameKind::Math, 10, today);
        book.record_correct(GameKind::Recall, 5, today);
        book.record_miss(GameKind::Math);

        assert_eq!(book.get(GameKind::Math).streak, 0);
        assert_eq!(book.get(GameKind::Recall).streak, 1);
    }

    #[test]
    fn test_negative_points_gain_nothing() {
        let mut book = ProgressBook::new();
        let today = day("2024-03-01");
        book.record_correct(GameKind::Puzzle, -50, today);

        let p = book.get(GameKind::Puzzle);
        assert_eq!(p.experience, 0);
        assert_eq!(p.streak, 1);
    }

    #[test]
    fn test_experience_cap() {
        let mut book = ProgressBook::new();
        let today = day("2024-03-01");
        book.record_correct(GameKind::Math, i64::MAX, today);
        book.record_correct(GameKind::Math, i64::MAX, today);
        assert_eq!(book.get(GameKind::Math).experience, EXPERIENCE_CAP);
    }

    #[test]
    fn test_from_value_skips_bad_entries() {
        let value = json!({
            "math": { "experience": 120, "streak": 4, "last_played": "2024-02-28" },
            "sudoku": { "experience": 9 },
            "recall": { "experience": "corrupt", "streak": 2 },
            "puzzle": 42
        });
        let book = ProgressBook::from_value(Some(value));

        let math = book.get(GameKind::Math);
        assert_eq!(math.experience, 120);
        assert_eq!(math.streak, 4);
        assert_eq!(math.last_played, Some("2024-02-28".parse().unwrap()));

        // Corrupt field degrades to default, sibling field survives
        let recall = book.get(GameKind::Recall);
        assert_eq!(recall.experience, 0);
        assert_eq!(recall.streak, 2);

        // Non-object entry and unknown game both degrade to defaults
        assert_eq!(book.get(GameKind::Puzzle), PerGameProgress::default());
    }

    #[test]
    fn test_from_value_non_object_is_empty() {
        assert_eq!(
            ProgressBook::from_value(Some(json!([1, 2]))).total_experience(),
            0
        );
        assert_eq!(ProgressBook::from_value(None).total_experience(), 0);
    }

    proptest! {
        /// Streak equals the number of trailing corrects since the last miss
        #[test]
        fn prop_streak_is_trailing_corrects(events in proptest::collection::vec(any::<bool>(), 0..60)) {
            let mut book = ProgressBook::new();
            let today = day("2024-03-01");
            for &correct in &events {
                if correct {
                    book.record_correct(GameKind::Math, 5, today);
                } else {
                    book.record_miss(GameKind::Math);
                }
            }
            let trailing = events.iter().rev().take_while(|&&c| c).count() as u32;
            prop_assert_eq!(book.get(GameKind::Math).streak, trailing);
        }

        /// Experience stays within [0, cap] for arbitrary point deltas
        #[test]
        fn prop_experience_bounded(deltas in proptest::collection::vec(any::<i64>(), 0..30)) {
            let mut book = ProgressBook::new();
            let today = day("2024-03-01");
            for &d in &deltas {
                book.record_correct(GameKind::Anagram, d, today);
            }
            let xp = book.get(GameKind::Anagram).experience;
            prop_assert!(xp <= EXPERIENCE_CAP);
        }
    }
}
