use thiserror::Error;

/// Errors raised by the file-backed store internals.
///
/// These never cross the persistence port boundary: the adapter swallows
/// them and falls back to defaults, per the fail-soft contract.
#[derive(Error, Debug)]
pub enum ArcadeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Invalid store key: {0}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, ArcadeError>;
