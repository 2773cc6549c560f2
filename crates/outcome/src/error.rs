//! Outcome Log Error Types

use derive_more::{Display, Error};
use std::path::PathBuf;

/// An outcome log error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for outcome log operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    #[display("could not open outcome log: {}", _0.display())]
    Open(#[error(not(source))] PathBuf),
    #[display("could not write outcome log: {}", _0.display())]
    Write(#[error(not(source))] PathBuf),
    #[display("could not remove outcome log: {}", _0.display())]
    Remove(#[error(not(source))] PathBuf),
    #[display("could not serialize outcome entry")]
    Serialize,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Disk full or a file locked by another process may clear up.
        matches!(self, Self::Open(_) | Self::Write(_) | Self::Remove(_))
    }
}
