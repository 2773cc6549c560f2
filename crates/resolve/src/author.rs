use exn::OptionExt;
use locus_lexicon::{AuthorRef, ContextResolver, Lexicon};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

/// Longest run of words an author designation may take (`dionysius of halicarnassus`).
pub(crate) const MAX_AUTHOR_WORDS: usize = 4;

/// A canonical author found at the start of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AuthorMatch {
    pub key: &'static str,
    /// Number of leading tokens the author designation used up.
    pub span: usize,
}

/// Finds the author designated by the first `max_words` tokens, trying the
/// longest window first so `dionysius periegetes` is not read as `dionysius`.
#[instrument(level = "trace", skip(lexicon))]
pub(crate) fn match_author(lexicon: &Lexicon, tokens: &[&str], max_words: usize) -> Result<AuthorMatch> {
    for words in (1..=max_words.min(tokens.len())).rev() {
        let window = tokens[..words].join(" ");
        match lexicon.lookup_author(&window) {
            Some(AuthorRef::Exact(key)) => return Ok(AuthorMatch { key, span: words }),
            Some(AuthorRef::Contextual(resolve)) => {
                let (key, extra) = resolve_contextual(resolve, &tokens[words..])
                    .ok_or_raise(|| ErrorKind::UnresolvedContext(window))?;
                return Ok(AuthorMatch { key, span: words + extra });
            },
            None => {},
        }
    }
    exn::bail!(ErrorKind::UnknownAuthor)
}

/// Feeds shrinking windows of the following words to `resolve`.
fn resolve_contextual(resolve: ContextResolver, following: &[&str]) -> Option<(&'static str, usize)> {
    (1..=MAX_AUTHOR_WORDS.min(following.len()))
        .rev()
        .find_map(|words| resolve(&following[..words].join(" ")).map(|key| (key, words)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tokens(reference: &str) -> Vec<&str> {
        reference.split_whitespace().collect()
    }

    #[rstest]
    #[case("hom. od. 4.66", "homer", 1)]
    #[case("homer od. 4.66", "homer", 1)]
    #[case("dion. hal. ant. rom. 1.5", "dionysius", 2)]
    #[case("dionysius of halicarnassus 1.5", "dionysius", 3)]
    #[case("dionysius periegetes 1006", "dionysius periegetes", 2)]
    #[case("dionysius ant. rom. 1.5", "dionysius", 1)]
    #[case("sextus empiricus adv. math. 1.5", "sextus", 2)]
    #[case("dio chrys. or. 12.5", "dio", 2)]
    #[case("h. hymn. 29.2", "homeric hymns", 2)]
    #[case("dionys. periegetes 1006", "dionysius periegetes", 2)]
    #[case("schol. soph. aj. 15", "scholia in sophoclem", 2)]
    #[case("schol. in hom. il. 1.5", "scholia in homerum", 3)]
    fn finds_authors(#[case] reference: &str, #[case] key: &str, #[case] span: usize) {
        let lexicon = Lexicon::standard().unwrap();
        let found = match_author(&lexicon, &tokens(reference), MAX_AUTHOR_WORDS).unwrap();
        assert_eq!((found.key, found.span), (key, span));
    }

    #[test]
    fn unknown_author() {
        let lexicon = Lexicon::standard().unwrap();
        let err = match_author(&lexicon, &tokens("hrmrm. od. 4.66"), MAX_AUTHOR_WORDS).unwrap_err();
        assert!(matches!(&*err, ErrorKind::UnknownAuthor));
    }

    #[test]
    fn unresolvable_context() {
        let lexicon = Lexicon::standard().unwrap();
        let err = match_author(&lexicon, &tokens("schol. hrmrm. 4.66"), MAX_AUTHOR_WORDS).unwrap_err();
        assert!(matches!(&*err, ErrorKind::UnresolvedContext(window) if window == "schol."));
    }

    #[test]
    fn window_limit_is_respected() {
        let lexicon = Lexicon::standard().unwrap();
        assert!(match_author(&lexicon, &tokens("dion. hal. 1.5"), 2).is_ok());
        assert!(match_author(&lexicon, &tokens("dion. hal. 1.5"), 1).is_err());
    }
}
