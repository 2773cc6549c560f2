//! Command Error Types

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A command error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for commands.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("could not load configuration")]
    Config,
    #[display("could not build the lexicon")]
    Lexicon,
    #[display("could not read {}", _0.display())]
    Read(#[error(not(source))] PathBuf),
    /// A line of the content stream is not a JSON object with a `content` string.
    #[display("invalid content unit on line {_0}")]
    InvalidUnit(#[error(not(source))] usize),
    #[display("could not write output")]
    Write,
    #[display("could not resolve citation")]
    Resolve,
    #[display("could not extract citations")]
    Extract,
    #[display("could not reset outcome logs")]
    Reset,
}
