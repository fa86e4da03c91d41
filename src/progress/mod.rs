//! Progress state: per-game experience and streaks, daily history, misses
//!
//! Each store loads defensively from raw JSON (field-by-field, bad entries
//! skipped) so a corrupt backing value degrades to defaults instead of
//! wiping the session.

pub mod history;
pub mod misses;
pub mod per_game;

pub use history::{DailyHistory, DailyHistoryEntry, HISTORY_WINDOW_DAYS};
pub use misses::{MissLedger, MissRecord, UNKNOWN_GAME};
pub use per_game::{PerGameProgress, ProgressBook, EXPERIENCE_CAP};
