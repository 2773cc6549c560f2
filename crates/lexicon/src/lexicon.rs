use std::collections::{HashMap, HashSet};

use tracing::instrument;

use crate::data::CORPORA;
use crate::error::{ErrorKind, Result, Table};
use crate::models::{AuthorRef, CorpusTables, WorkCode};
use crate::variants::transform_title;

/// Merged, expanded lookup tables. Built once, then shared by reference.
#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    authors: HashMap<&'static str, &'static str>,
    abbreviations: HashMap<&'static str, AuthorRef>,
    works: HashMap<&'static str, HashMap<String, WorkCode>>,
    single_work: HashSet<&'static str>,
}

/// Everything an author can be cited as, for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TitleForms {
    pub author: &'static str,
    pub abbreviations: Vec<&'static str>,
    pub titles: Vec<String>,
}

impl Lexicon {
    /// Lexicon of the built-in Greek, Latin, English and scholia corpora.
    pub fn standard() -> Result<Self> {
        build_lexicon(&CORPORA)
    }

    /// URN stem of a canonical author key.
    pub fn author_stem(&self, author: &str) -> Option<&'static str> {
        self.authors.get(author).copied()
    }

    /// Looks up one window of words as a canonical author key, falling back
    /// to the abbreviation table.
    pub fn lookup_author(&self, window: &str) -> Option<AuthorRef> {
        if let Some((key, _)) = self.authors.get_key_value(window) {
            return Some(AuthorRef::Exact(key));
        }
        self.abbreviations.get(window).copied()
    }

    pub fn work(&self, author: &str, title: &str) -> Option<WorkCode> {
        self.works.get(author)?.get(title).copied()
    }

    pub fn is_single_work(&self, author: &str) -> bool {
        self.single_work.contains(author)
    }

    /// Abbreviations and title spellings (explicit and generated) of every
    /// author, sorted for stable output.
    pub fn title_forms(&self) -> Vec<TitleForms> {
        let mut authors: Vec<&'static str> = self.authors.keys().copied().collect();
        authors.sort_unstable();
        authors
            .into_iter()
            .map(|author| {
                let mut abbreviations: Vec<&'static str> = self
                    .abbreviations
                    .iter()
                    .filter(|(_, target)| target.exact() == Some(author))
                    .map(|(spelling, _)| *spelling)
                    .collect();
                abbreviations.sort_unstable();
                let mut titles: Vec<String> =
                    self.works.get(author).map(|titles| titles.keys().cloned().collect()).unwrap_or_default();
                titles.sort_unstable();
                TitleForms { author, abbreviations, titles }
            })
            .collect()
    }
}

/// Merges `corpora` into one lexicon and expands every work title with its
/// generated spellings.
///
/// Returns [`ErrorKind::KeyCollision`] if two corpora share an author URN,
/// work or abbreviation key.
#[instrument(skip(corpora), fields(corpora = corpora.len()))]
pub fn build_lexicon(corpora: &[CorpusTables]) -> Result<Lexicon> {
    ensure_disjoint(corpora)?;
    let mut lexicon = Lexicon::default();
    for corpus in corpora {
        lexicon.authors.extend(corpus.authors.iter().copied());
        lexicon.abbreviations.extend(corpus.abbreviations.iter().copied());
        lexicon.single_work.extend(corpus.single_work_authors.iter().copied());
        for (author, titles) in corpus.works {
            lexicon.works.insert(*author, expand_titles(titles, corpus.codes_as_titles));
        }
    }
    tracing::debug!(
        authors = lexicon.authors.len(),
        abbreviations = lexicon.abbreviations.len(),
        titles = lexicon.works.values().map(HashMap::len).sum::<usize>(),
        "built lexicon",
    );
    Ok(lexicon)
}

fn ensure_disjoint(corpora: &[CorpusTables]) -> Result<()> {
    for table in [Table::AuthorUrns, Table::Works, Table::Abbreviations] {
        let mut owners: HashMap<&'static str, &'static str> = HashMap::new();
        for corpus in corpora {
            for key in table_keys(corpus, table) {
                if let Some(first) = owners.insert(key, corpus.name)
                    && first != corpus.name
                {
                    exn::bail!(ErrorKind::KeyCollision { table, key, first, second: corpus.name });
                }
            }
        }
    }
    Ok(())
}

fn table_keys(corpus: &CorpusTables, table: Table) -> Vec<&'static str> {
    match table {
        Table::AuthorUrns => corpus.authors.iter().map(|(key, _)| *key).collect(),
        Table::Works => corpus.works.iter().map(|(key, _)| *key).collect(),
        Table::Abbreviations => corpus.abbreviations.iter().map(|(key, _)| *key).collect(),
    }
}

/// Explicit titles always win; a generated spelling only fills a gap left by
/// the explicit titles and the spellings generated before it.
#[instrument(level = "trace", skip(titles))]
fn expand_titles(titles: &[(&'static str, WorkCode)], codes_as_titles: bool) -> HashMap<String, WorkCode> {
    let mut expanded: HashMap<String, WorkCode> =
        titles.iter().map(|(title, code)| (title.to_lowercase(), *code)).collect();
    if codes_as_titles {
        for (_, code) in titles {
            if let WorkCode::Code(literal) = code {
                expanded.entry(literal.to_string()).or_insert(*code);
            }
        }
    }
    for (title, code) in titles {
        for variant in transform_title(&title.to_lowercase()) {
            expanded.entry(variant).or_insert(*code);
        }
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ENGLISH, GREEK, LATIN};
    use crate::models::AuthorRef::Exact;
    use crate::models::WorkCode::Code;

    const CLASHING: CorpusTables = CorpusTables {
        name: "clashing",
        authors: &[("pseudo-homer", "urn:cts:greekLit:tlg9999")],
        abbreviations: &[("hom.", Exact("pseudo-homer"))],
        works: &[],
        single_work_authors: &[],
        codes_as_titles: false,
    };

    const LETTERS: CorpusTables = CorpusTables {
        name: "letters",
        authors: &[("epistolographer", "urn:cts:greekLit:tlg9998")],
        abbreviations: &[],
        works: &[("epistolographer", &[("letters", Code("tlg001")), ("lex", Code("tlg002")), ("l.", Code("tlg003"))])],
        single_work_authors: &[],
        codes_as_titles: false,
    };

    fn standard() -> Lexicon {
        Lexicon::standard().unwrap()
    }

    #[test]
    fn built_in_corpora_are_disjoint() {
        assert!(Lexicon::standard().is_ok());
    }

    #[test]
    fn collisions_are_fatal() {
        let err = build_lexicon(&[GREEK, CLASHING]).unwrap_err();
        assert!(matches!(
            &*err,
            ErrorKind::KeyCollision { table: Table::Abbreviations, key: "hom.", first: "greek", second: "clashing" }
        ));
    }

    #[test]
    fn explicit_titles_beat_generated_ones() {
        let lexicon = build_lexicon(&[LETTERS]).unwrap();
        // "l." is generated by "letters" and "lex" too, but is listed explicitly.
        assert_eq!(lexicon.work("epistolographer", "l."), Some(Code("tlg003")));
        // "le" is generated by both titles; the first one declared keeps it.
        assert_eq!(lexicon.work("epistolographer", "le"), Some(Code("tlg001")));
        assert_eq!(lexicon.work("epistolographer", "lettera"), Some(Code("tlg001")));
    }

    #[test]
    fn generated_spellings_resolve() {
        let lexicon = standard();
        assert_eq!(lexicon.work("homer", "od."), Some(Code("tlg002")));
        assert_eq!(lexicon.work("homer", "il."), Some(Code("tlg001")));
        assert_eq!(lexicon.work("aristotle", "hist._an."), Some(Code("tlg014")));
        assert_eq!(lexicon.work("aristotle", "de_an."), Some(Code("tlg002")));
        assert_eq!(lexicon.work("hesiod", "w.d."), Some(Code("tlg002")));
        assert_eq!(lexicon.work("homer", "simpsons"), None);
    }

    #[test]
    fn code_aliases_only_where_requested() {
        let lexicon = build_lexicon(&[GREEK, LATIN, ENGLISH]).unwrap();
        assert_eq!(lexicon.work("shakespeare", "mac"), Some(Code("mac")));
        assert_eq!(lexicon.work("shakespeare", "1h4"), Some(Code("1h4")));
        assert_eq!(lexicon.work("homer", "tlg002"), None);
    }

    #[test]
    fn authors_by_key_or_abbreviation() {
        let lexicon = standard();
        assert_eq!(lexicon.lookup_author("homer").and_then(|a| a.exact()), Some("homer"));
        assert_eq!(lexicon.lookup_author("hom.").and_then(|a| a.exact()), Some("homer"));
        assert_eq!(lexicon.lookup_author("dionys. periegetes").and_then(|a| a.exact()), Some("dionysius periegetes"));
        assert!(matches!(lexicon.lookup_author("schol."), Some(AuthorRef::Contextual(_))));
        assert!(lexicon.lookup_author("dionys.").is_none());
        assert!(lexicon.lookup_author("hrmrm.").is_none());
    }

    #[test]
    fn every_reference_points_at_a_known_author() {
        let lexicon = standard();
        for corpus in CORPORA {
            for (spelling, target) in corpus.abbreviations {
                if let Some(author) = target.exact() {
                    assert!(lexicon.author_stem(author).is_some(), "{spelling} -> {author}");
                }
            }
            for (author, _) in corpus.works {
                assert!(lexicon.author_stem(author).is_some(), "works of {author}");
            }
            for author in corpus.single_work_authors {
                assert!(lexicon.author_stem(author).is_some(), "single work {author}");
            }
        }
    }

    #[test]
    fn title_forms_list_abbreviations_and_spellings() {
        let forms = standard().title_forms();
        let homer = forms.iter().find(|forms| forms.author == "homer").unwrap();
        assert_eq!(homer.abbreviations, vec!["hom."]);
        assert!(homer.titles.iter().any(|title| title == "odyssey"));
        assert!(homer.titles.iter().any(|title| title == "od."));
        assert!(forms.windows(2).all(|pair| pair[0].author < pair[1].author));
    }
}
