//! Citation reference resolution.
//!
//! A [`Resolver`] borrows a [`Lexicon`] and turns free-text citations such as
//! `Hom. Od. 4.66` into canonical CTS URNs
//! (`urn:cts:greekLit:tlg0012.tlg002.perseus-grc2:4.66`).

mod author;
mod consts;
pub mod error;
mod locus;
pub mod normalize;
mod select;
mod urn;

use locus_lexicon::Lexicon;

/// Where a reference was found, reported alongside resolution failures.
#[derive(Debug, Default, Clone, Copy)]
pub struct Context<'a> {
    /// The markup surrounding the citation.
    pub content: Option<&'a str>,
    pub filename: Option<&'a str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> Resolver<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &'l Lexicon {
        self.lexicon
    }
}
