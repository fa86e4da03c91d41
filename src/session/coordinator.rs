//! Scoring and streak coordinator
//!
//! Central entry point for answer events. A correct answer feeds the
//! per-game book, the daily history, and the session totals; a miss resets
//! only the per-game streak and lands in the miss ledger. Session streak and
//! experience are motivation metrics: misses never touch them, and they
//! restart on a fresh process or day rollover.

use crate::core::GameKind;
use crate::difficulty::math::{self, MathQuestion};
use crate::persist::{
    JsonStore, KeyValueStore, HISTORY_KEY, MISSES_KEY, PROGRESS_KEY, SETTINGS_KEY,
};
use crate::progress::{DailyHistory, MissLedger, MissRecord, ProgressBook};
use crate::session::settings::SessionSettings;
use crate::session::timer::SessionTimer;
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;

/// Experience points per level
const POINTS_PER_LEVEL: f64 = 50.0;
const MIN_LEVEL: f64 = 1.0;
const MAX_LEVEL: f64 = 99.0;

/// Level derived from cumulative session experience, clamped to [1, 99]
pub fn level_for(experience: u64) -> f64 {
    (1.0 + experience as f64 / POINTS_PER_LEVEL).clamp(MIN_LEVEL, MAX_LEVEL)
}

/// Session-summary snapshot for display
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub today_experience: u64,
    pub session_experience: u64,
    pub session_streak: u32,
    pub level: f64,
    pub misses_by_game: BTreeMap<&'static str, usize>,
}

/// Owns all durable state and routes answer events through it.
///
/// All persistence is fire-and-forget through the injected store: state is
/// written after every event and failures are silently dropped, so gameplay
/// never waits on or dies with the backing store.
pub struct Trainer<S: KeyValueStore> {
    store: JsonStore<S>,
    progress: ProgressBook,
    history: DailyHistory,
    misses: MissLedger,
    settings: SessionSettings,
    timer: SessionTimer,
    session_experience: u64,
    session_streak: u32,
    last_scored_day: Option<NaiveDate>,
}

impl<S: KeyValueStore> Trainer<S> {
    /// Load all persisted state defensively; anything missing or corrupt
    /// starts from defaults.
    pub fn new(store: S) -> Self {
        let store = JsonStore::new(store);
        let progress = ProgressBook::from_value(store.get_value(PROGRESS_KEY));
        let history = DailyHistory::from_value(store.get_value(HISTORY_KEY));
        let misses = MissLedger::from_value(store.get_value(MISSES_KEY));
        let settings = store
            .get(SETTINGS_KEY, SessionSettings::default())
            .normalized();
        let timer = SessionTimer::new(settings.session_minutes);

        Self {
            store,
            progress,
            history,
            misses,
            settings,
            timer,
            session_experience: 0,
            session_streak: 0,
            last_scored_day: None,
        }
    }

    /// A correct answer worth `points`.
    ///
    /// Updates the per-game book, the daily history, and the session totals,
    /// then persists the touched stores.
    pub fn on_score(&mut self, game: GameKind, points: i64, today: NaiveDate) {
        self.roll_session_day(today);

        let gained = points.max(0) as u64;
        self.progress.record_correct(game, points, today);
        self.history.record(today, gained);
        self.session_experience = self.session_experience.saturating_add(gained);
        self.session_streak += 1;
        self.last_scored_day = Some(today);

        self.store.set(PROGRESS_KEY, &self.progress);
        self.store.set(HISTORY_KEY, &self.history);
    }

    /// An incorrect answer described by `record`.
    ///
    /// Resets the game's streak and appends to the miss ledger. Session
    /// streak and experience are untouched.
    pub fn on_miss(&mut self, game: GameKind, record: MissRecord, today: NaiveDate) {
        self.progress.record_miss(game);
        self.misses.append(today, record);

        self.store.set(PROGRESS_KEY, &self.progress);
        self.store.set(MISSES_KEY, &self.misses);
    }

    // Session totals restart when scoring crosses into a new calendar day.
    fn roll_session_day(&mut self, today: NaiveDate) {
        if let Some(last) = self.last_scored_day {
            if last != today {
                tracing::info!("day rollover {} -> {}, session totals restart", last, today);
                self.session_experience = 0;
                self.session_streak = 0;
            }
        }
    }

    pub fn session_experience(&self) -> u64 {
        self.session_experience
    }

    pub fn session_streak(&self) -> u32 {
        self.session_streak
    }

    pub fn level(&self) -> f64 {
        level_for(self.session_experience)
    }

    pub fn progress(&self) -> &ProgressBook {
        &self.progress
    }

    pub fn history(&self) -> &DailyHistory {
        &self.history
    }

    pub fn misses(&self) -> &MissLedger {
        &self.misses
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut SessionTimer {
        &mut self.timer
    }

    /// Change the session length; persisted immediately, timer reset to it
    pub fn set_session_minutes(&mut self, minutes: u32) {
        self.settings = SessionSettings::clamped(minutes);
        self.timer.reset(self.settings.session_minutes);
        self.store.set(SETTINGS_KEY, &self.settings);
    }

    /// Next arithmetic question at the difficulty the math progress selects
    pub fn math_question(&self, rng: &mut impl Rng) -> MathQuestion {
        math::question(&self.progress.get(GameKind::Math), rng)
    }

    /// Snapshot for the end-of-session summary display
    pub fn summary(&self, today: NaiveDate) -> SessionSummary {
        let misses_by_game = MissLedger::group_by_game(self.misses.for_day(today))
            .into_iter()
            .map(|(game, records)| (game, records.len()))
            .collect();

        SessionSummary {
            today_experience: self.history.for_day(today),
            session_experience: self.session_experience,
            session_streak: self.session_streak,
            level: self.level(),
            misses_by_game,
        }
    }
}
