//! Append-only miss ledger
//!
//! Incorrect answers are recorded per day with a free-form description of
//! the prompt. Grouping by game is for session-summary display only and must
//! be total over malformed input: records with an unknown game tag land in
//! the `"unknown"` bucket.

use crate::core::GameKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Fallback bucket for records whose game tag fails to parse
pub const UNKNOWN_GAME: &str = "unknown";

/// One incorrect answer. The game tag is kept as the raw persisted string so
/// a malformed record still loads and displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissRecord {
    #[serde(default)]
    pub game: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl MissRecord {
    pub fn new(game: GameKind) -> Self {
        Self {
            game: game.as_str().to_string(),
            details: Map::new(),
        }
    }

    /// Attach a prompt-describing field
    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }
}

/// Day-keyed lists of miss records, insertion order preserved.
///
/// Serializes as the bare day-to-records map.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct MissLedger {
    days: BTreeMap<NaiveDate, Vec<MissRecord>>,
}

impl MissLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, day: NaiveDate, record: MissRecord) {
        self.days.entry(day).or_default().push(record);
    }

    pub fn for_day(&self, day: NaiveDate) -> &[MissRecord] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Group records by canonical game name for summary display.
    ///
    /// Unparseable tags group under [`UNKNOWN_GAME`]. Never fails.
    pub fn group_by_game<'a>(records: &'a [MissRecord]) -> BTreeMap<&'static str, Vec<&'a MissRecord>> {
        let mut groups: BTreeMap<&'static str, Vec<&MissRecord>> = BTreeMap::new();
        for record in records {
            let bucket = GameKind::parse(&record.game)
                .map(|g| g.as_str())
                .unwrap_or(UNKNOWN_GAME);
            groups.entry(bucket).or_default().push(record);
        }
        groups
    }

    /// Rebuild from a persisted JSON value, skipping malformed entries
    pub fn from_value(value: Option<Value>) -> Self {
        let mut ledger = Self::new();
        let Some(Value::Object(map)) = value else {
            return ledger;
        };
        for (key, entry) in map {
            let Ok(day) = key.parse::<NaiveDate>() else {
                continue;
            };
            let Value::Array(items) = entry else {
                continue;
            };
            let records: Vec<MissRecord> = items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect();
            if !records.is_empty() {
                ledger.days.insert(day, records);
            }
        }
        ledger
    }
}
