//! Local persistence port
//!
//! Every durable piece of state flows through a [`KeyValueStore`]: a plain
//! string key-value surface with fail-soft semantics. The [`JsonStore`]
//! adapter layers JSON encoding on top. Loss of persistence must never crash
//! a session, so reads fall back to caller-supplied defaults and failed
//! writes are dropped after a debug trace.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Key for the daily experience history map
pub const HISTORY_KEY: &str = "arcade.history";
/// Key for the per-game progress map
pub const PROGRESS_KEY: &str = "arcade.progress";
/// Key for the misses-by-day map
pub const MISSES_KEY: &str = "arcade.misses";
/// Key for session settings
pub const SETTINGS_KEY: &str = "arcade.settings";

/// Raw string key-value surface behind all durable state.
///
/// Implementations are fail-soft: a failed read is `None`, a failed write is
/// a silent no-op. Each key is an independent read/write unit with no
/// cross-key transactional guarantees.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

/// JSON encoding adapter over any [`KeyValueStore`].
pub struct JsonStore<S: KeyValueStore> {
    inner: S,
}

impl<S: KeyValueStore> JsonStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Read and decode a key. Missing key, decode failure, or store
    /// unavailability all yield `default`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.inner.read(key) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    tracing::debug!("discarding corrupt entry for {}: {}", key, e);
                    default
                }
            },
            None => default,
        }
    }

    /// Read a key as a raw JSON value for field-by-field defensive merging.
    pub fn get_value(&self, key: &str) -> Option<Value> {
        let raw = self.inner.read(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("discarding corrupt entry for {}: {}", key, e);
                None
            }
        }
    }

    /// Encode and write a key. Failures are dropped.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.inner.write(key, &raw),
            Err(e) => tracing::debug!("failed to encode {}: {}", key, e),
        }
    }
}
