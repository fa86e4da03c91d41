//! Persisted session settings

use serde::{Deserialize, Serialize};

/// Shortest allowed focus session
pub const MIN_SESSION_MINUTES: u32 = 5;
/// Longest allowed focus session
pub const MAX_SESSION_MINUTES: u32 = 120;
/// Session length used when nothing is persisted
pub const DEFAULT_SESSION_MINUTES: u32 = 25;

/// The only piece of session state that persists across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_minutes")]
    pub session_minutes: u32,
}

fn default_minutes() -> u32 {
    DEFAULT_SESSION_MINUTES
}

impl SessionSettings {
    /// Build settings with the minutes clamped into the allowed range
    pub fn clamped(session_minutes: u32) -> Self {
        Self {
            session_minutes: session_minutes.clamp(MIN_SESSION_MINUTES, MAX_SESSION_MINUTES),
        }
    }

    /// Re-clamp after a defensive load; persisted data may be out of range
    pub fn normalized(self) -> Self {
        Self::clamped(self.session_minutes)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            session_minutes: DEFAULT_SESSION_MINUTES,
        }
    }
}
