pub mod error;
pub mod types;

pub use error::{ArcadeError, Result};
pub use types::GameKind;
