//! Lexicon Error Types

use derive_more::{Display, Error};

/// A lexicon construction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for lexicon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which of the merged tables a collision was found in.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    #[display("author URN")]
    AuthorUrns,
    #[display("work")]
    Works,
    #[display("author abbreviation")]
    Abbreviations,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Two corpora declare the same key in the same table. The merged lexicon
    /// would silently prefer one of them, so construction refuses.
    #[display("{table} key '{key}' is declared by both the {first} and {second} corpora")]
    KeyCollision {
        table: Table,
        key: &'static str,
        first: &'static str,
        second: &'static str,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Static tables do not change between attempts.
        false
    }
}
