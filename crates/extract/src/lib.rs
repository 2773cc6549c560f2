//! Citation extraction.
//!
//! Scans content units of converted commentaries and dictionaries for
//! `<cit>` elements, resolves the `<bibl>` of each one to a CTS URN and
//! records the outcome.

mod consts;
pub mod error;
mod extract;
mod models;
mod truncate;

pub use crate::extract::Extractor;
pub use crate::models::{CitationCounter, CitationData, CitationRecord};
pub use crate::truncate::{DEFAULT_CONTEXT_BYTES, safe_markup_truncate};
