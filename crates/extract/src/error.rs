//! Extraction Error Types

use derive_more::{Display, Error};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Extraction itself never fails on a single bad citation; these abort the
/// whole document.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The resolver hit a fatal error for the citation with this identifier.
    #[display("could not resolve citation {_0}")]
    Resolve(#[error(not(source))] String),
    /// The outcome of the citation with this identifier could not be recorded.
    #[display("could not record outcome of citation {_0}")]
    Outcome(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Outcome(_))
    }
}
