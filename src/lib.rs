//! Brain Arcade - progress and adaptive difficulty engine
//!
//! Core state model for a five-game brain-training arcade: per-game
//! experience and streaks, a daily history ledger, a miss ledger, adaptive
//! difficulty policies, and a session coordinator. Presentation layers feed
//! answer events in through [`session::Trainer`] and read the next question's
//! parameters back out of [`difficulty`].

pub mod core;
pub mod difficulty;
pub mod persist;
pub mod progress;
pub mod session;
