//! Daily experience history ledger
//!
//! Maps calendar day to accumulated experience. The chart-facing view is a
//! fixed 30-day trailing window ending today, synthesized on every call with
//! zero-experience entries for idle days. Old days stay in the backing map;
//! they only fall out of the window.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Length of the trailing display window
pub const HISTORY_WINDOW_DAYS: i64 = 30;

/// One day of the materialized window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyHistoryEntry {
    pub day: NaiveDate,
    pub experience: u64,
}

/// Day-keyed experience totals.
///
/// Serializes as the bare `"YYYY-MM-DD"` to experience map.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DailyHistory {
    days: BTreeMap<NaiveDate, u64>,
}

impl DailyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` experience to the day's bucket, creating it if absent
    pub fn record(&mut self, day: NaiveDate, delta: u64) {
        let bucket = self.days.entry(day).or_insert(0);
        *bucket = bucket.saturating_add(delta);
    }

    /// Experience accumulated on a single day (0 if idle)
    pub fn for_day(&self, day: NaiveDate) -> u64 {
        self.days.get(&day).copied().unwrap_or(0)
    }

    /// Exactly 30 entries, oldest first, ending on `today`.
    ///
    /// Recomputed on every call; idle days appear with zero experience.
    pub fn last_30_days(&self, today: NaiveDate) -> Vec<DailyHistoryEntry> {
        (0..HISTORY_WINDOW_DAYS)
            .rev()
            .map(|offset| {
                let day = today - Duration::days(offset);
                DailyHistoryEntry {
                    day,
                    experience: self.for_day(day),
                }
            })
            .collect()
    }

    /// Rebuild from a persisted JSON value, skipping malformed entries
    pub fn from_value(value: Option<Value>) -> Self {
        let mut history = Self::new();
        let Some(Value::Object(map)) = value else {
            return history;
        };
        for (key, entry) in map {
            let Ok(day) = key.parse::<NaiveDate>() else {
                continue;
            };
            if let Some(xp) = entry.as_u64() {
                history.days.insert(day, xp);
            }
        }
        history
    }
}
