//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`NotFound`] thrown when no expense matches the requested id.
//! - [`InvalidInput`] thrown when a value cannot be stored as given.
//! - [`Io`] and [`Serialization`] thrown when the backing file cannot be
//!   read, written or parsed.
//!
//!  [`NotFound`]: EngineError::NotFound
//!  [`InvalidInput`]: EngineError::InvalidInput
//!  [`Io`]: EngineError::Io
//!  [`Serialization`]: EngineError::Serialization
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("expense {0} not found")]
    NotFound(u64),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Serialization(a), Self::Serialization(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
