//! Focus session: settings, countdown timer, and the scoring coordinator

pub mod coordinator;
pub mod settings;
pub mod timer;

pub use coordinator::{level_for, SessionSummary, Trainer};
pub use settings::{SessionSettings, MAX_SESSION_MINUTES, MIN_SESSION_MINUTES};
pub use timer::SessionTimer;
