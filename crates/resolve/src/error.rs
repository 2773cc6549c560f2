//! Resolution Error Types
//!
//! Most of these describe a citation that cannot be resolved and are only
//! ever raised internally: [`Resolver::build_urn`](crate::Resolver::build_urn)
//! logs them and reports "no URN". Only [`ErrorKind::is_fatal`] kinds reach
//! the caller.

use derive_more::{Display, Error};

/// A resolution error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("empty citation reference")]
    EmptyReference,
    #[display("author not recognized")]
    UnknownAuthor,
    /// An abbreviation such as `schol.` whose following words name no known
    /// author.
    #[display("could not work out which author '{_0}' refers to")]
    UnresolvedContext(#[error(not(source))] String),
    #[display("wrong format for citation reference")]
    WrongFormat,
    #[display("no passage locus in citation reference")]
    MissingLocus,
    #[display("position {index} is outside of the collection")]
    OutsideCollection { index: u32 },
    /// A corpus code that the URN scheme has no namespace for.
    #[display("unhandled corpus code: {_0}")]
    UnhandledCorpus(#[error(not(source))] String),
    /// The lexicon names an author it has no URN stem for.
    #[display("no URN stem for author '{_0}'")]
    MissingStem(#[error(not(source))] &'static str),
}

impl ErrorKind {
    /// Fatal errors mean the tables or the input corpus are broken in a way
    /// that skipping one citation does not fix.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::UnhandledCorpus(_) | Self::MissingStem(_))
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
