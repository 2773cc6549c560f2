use std::fmt;

/// Picks a canonical author key from the words that follow an ambiguous
/// abbreviation (`schol.` needs to know *whose* scholia are cited).
pub type ContextResolver = fn(&str) -> Option<&'static str>;

/// What an informal author spelling points at.
#[derive(Clone, Copy)]
pub enum AuthorRef {
    /// A canonical author key.
    Exact(&'static str),
    /// Resolvable only with the words that follow it.
    Contextual(ContextResolver),
}

impl AuthorRef {
    pub fn exact(&self) -> Option<&'static str> {
        match self {
            Self::Exact(key) => Some(*key),
            Self::Contextual(_) => None,
        }
    }
}

impl fmt::Debug for AuthorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(key) => f.debug_tuple("Exact").field(key).finish(),
            Self::Contextual(_) => f.write_str("Contextual(..)"),
        }
    }
}

/// Work identifier recorded against a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkCode {
    /// A literal work identifier such as `tlg002`.
    Code(&'static str),
    /// An ordered run of works (speeches, letters, hymns) cited by position.
    /// Member `n` of the collection has the identifier `stem` followed by
    /// `first + n - 1`, zero-padded to three digits.
    Collection {
        stem: &'static str,
        first: u32,
        last: u32,
    },
}

impl WorkCode {
    /// Identifier of the `index`-th (1-based) member of a collection, or
    /// `None` when the position falls outside of it.
    ///
    /// Literal codes have no members.
    pub fn member(&self, index: u32) -> Option<String> {
        let Self::Collection { stem, first, last } = *self else {
            return None;
        };
        let absolute = index.checked_sub(1)?.checked_add(first)?;
        (first..=last).contains(&absolute).then(|| format!("{stem}{absolute:03}"))
    }
}

/// CTS namespace of an author stem, which decides the edition suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    GreekLit,
    LatinLit,
    EnglishLit,
    Other,
}

impl Namespace {
    pub fn from_stem(stem: &str) -> Self {
        if stem.contains("greekLit") {
            Self::GreekLit
        } else if stem.contains("latinLit") {
            Self::LatinLit
        } else if stem.contains("englishLit") {
            Self::EnglishLit
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::GreekLit => Some("greekLit"),
            Self::LatinLit => Some("latinLit"),
            Self::EnglishLit => Some("englishLit"),
            Self::Other => None,
        }
    }

    pub fn edition_suffix(&self) -> Option<&'static str> {
        match self {
            Self::GreekLit => Some("perseus-grc2"),
            Self::LatinLit => Some("perseus-lat2"),
            Self::EnglishLit => Some("perseus-eng2"),
            Self::Other => None,
        }
    }

    /// Work code used for authors cited without naming a work.
    pub fn default_work(&self) -> Option<&'static str> {
        match self {
            Self::GreekLit => Some("tlg001"),
            Self::LatinLit => Some("phi001"),
            Self::EnglishLit | Self::Other => None,
        }
    }
}

/// The lookup tables contributed by one corpus.
#[derive(Debug, Clone, Copy)]
pub struct CorpusTables {
    pub name: &'static str,
    /// Canonical author key to URN stem.
    pub authors: &'static [(&'static str, &'static str)],
    pub abbreviations: &'static [(&'static str, AuthorRef)],
    /// Canonical author key to its explicitly listed titles.
    pub works: &'static [(&'static str, &'static [(&'static str, WorkCode)])],
    pub single_work_authors: &'static [&'static str],
    /// Also accept each literal work code as a title of its own work.
    pub codes_as_titles: bool,
}
