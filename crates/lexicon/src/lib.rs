//! Author and work lookup tables used to resolve classical citations.
//!
//! The built-in corpora live in [`data`]; [`build_lexicon`] merges any set of
//! [`CorpusTables`] into one [`Lexicon`], refusing key collisions between
//! corpora and expanding every work title with the informal spellings
//! commentaries tend to use.

pub mod data;
pub mod error;
mod lexicon;
mod models;
mod variants;

pub use crate::lexicon::{Lexicon, TitleForms, build_lexicon};
pub use crate::models::{AuthorRef, ContextResolver, CorpusTables, Namespace, WorkCode};
pub use crate::variants::smart_suspend;
