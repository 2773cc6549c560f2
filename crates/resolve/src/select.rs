use tracing::instrument;

use crate::Resolver;
use crate::author::match_author;
use crate::consts::{
    CORPUS_CODE_REGEX, MANY_WORDS_ONE_NUMBER_REGEX, MANY_WORDS_TWO_NUMBERS_REGEX, ONE_WORD_ONE_NUMBER_REGEX,
    ONE_WORD_TWO_NUMBERS_REGEX,
};
use crate::normalize::normalize;

/// Author designations considered when choosing between two references.
const SELECT_AUTHOR_WORDS: usize = 3;
const SELECT_TITLE_WORDS: usize = 3;

impl Resolver<'_> {
    /// Chooses the more useful of the two ways a document may cite the same
    /// passage: the `n` attribute of a `<bibl>` element and its inline text.
    ///
    /// Both are normalized first, and the chosen one is returned normalized.
    /// When only one is present it is returned as is. Otherwise the fullest
    /// shape of reference with a recognized author wins, the attribute form
    /// winning ties.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve_reference(&self, attribute: Option<&str>, inline: Option<&str>) -> Option<String> {
        let attribute = attribute.map(normalize).filter(|reference| !reference.is_empty());
        let inline = inline.map(normalize).filter(|reference| !reference.is_empty());
        let candidates = match (attribute, inline) {
            (Some(attribute), Some(inline)) => [attribute, inline],
            (Some(only), None) | (None, Some(only)) => return Some(only),
            (None, None) => {
                tracing::warn!("citation has no reference");
                return None;
            },
        };

        if let Some(coded) = candidates.iter().find(|reference| CORPUS_CODE_REGEX.is_match(reference)) {
            return Some(coded.clone());
        }

        let shapes = [
            &*MANY_WORDS_TWO_NUMBERS_REGEX,
            &*MANY_WORDS_ONE_NUMBER_REGEX,
            &*ONE_WORD_TWO_NUMBERS_REGEX,
            &*ONE_WORD_ONE_NUMBER_REGEX,
        ];
        for shape in shapes {
            if let Some(found) =
                candidates.iter().find(|reference| shape.is_match(reference) && self.has_author(reference))
            {
                return Some(found.clone());
            }
        }

        let recognized: Vec<&String> = candidates.iter().filter(|reference| self.has_author(reference)).collect();
        match recognized.as_slice() {
            [only] => return Some((*only).clone()),
            [_, _] => {
                if let Some(found) = recognized.iter().find(|reference| self.has_work(reference)) {
                    return Some((*found).clone());
                }
            },
            _ => {},
        }
        tracing::warn!(attribute = %candidates[0], inline = %candidates[1], "could not choose a citation reference");
        None
    }

    fn has_author(&self, reference: &str) -> bool {
        let tokens: Vec<&str> = reference.split_whitespace().collect();
        match_author(self.lexicon, &tokens, SELECT_AUTHOR_WORDS).is_ok()
    }

    /// Whether a title of the reference's author directly follows it.
    fn has_work(&self, reference: &str) -> bool {
        let tokens: Vec<&str> = reference.split_whitespace().collect();
        let Ok(author) = match_author(self.lexicon, &tokens, SELECT_AUTHOR_WORDS) else {
            return false;
        };
        let rest = &tokens[author.span..];
        (1..=SELECT_TITLE_WORDS.min(rest.len())).any(|words| {
            let window = &rest[..words];
            self.lexicon.work(author.key, &window.join("_")).is_some()
                || self.lexicon.work(author.key, &window.join(" ")).is_some()
        })
    }
}

#[cfg(test)]
mod tests {
    use locus_lexicon::Lexicon;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::inline_has_the_locus(Some("HH 29"), Some("HH 29.2"), Some("hh 29.2"))]
    #[case::attribute_wins_ties(Some("HH 29.2"), Some("HH 29.2"), Some("hh 29.2"))]
    #[case::fullest_shape(Some("Hom. Od. 4.66"), Some("Od. 4.66"), Some("hom. od. 4.66"))]
    #[case::work_and_one_number(Some("Hom. Od. 4"), Some("Hom. Od."), Some("hom. od. 4"))]
    #[case::author_and_two_numbers(Some("Hom. 1.5"), Some("Hom. 1"), Some("hom. 1.5"))]
    #[case::author_and_one_number(Some("Hom."), Some("Hom. 1"), Some("hom. 1"))]
    #[case::recognized_author(Some("Hrmrm. Od."), Some("Hom. Od."), Some("hom. od."))]
    #[case::recognized_work(Some("Hom. Simpsons"), Some("Hom. Od."), Some("hom. od."))]
    #[case::only_attribute(Some("Hrmrm. 4"), None, Some("hrmrm. 4"))]
    #[case::only_inline(Some("  "), Some("<title>Od.</title> 4.66"), Some("od. 4.66"))]
    #[case::embedded_code(Some("Od. 72"), Some("tlg5037.tlg006 72"), Some("tlg5037.tlg006 72"))]
    #[case::neither_recognized(Some("Hrmrm. Od."), Some("Grmbl. Il."), None)]
    #[case::nothing(None, Some(""), None)]
    fn chooses_references(
        #[case] attribute: Option<&str>,
        #[case] inline: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let lexicon = Lexicon::standard().unwrap();
        let resolver = Resolver::new(&lexicon);
        assert_eq!(resolver.resolve_reference(attribute, inline).as_deref(), expected);
    }

    #[test]
    fn embedded_codes_are_taken_verbatim() {
        let lexicon = Lexicon::standard().unwrap();
        let resolver = Resolver::new(&lexicon);
        let reference = resolver.resolve_reference(Some("tlg5037.tlg006 72"), Some("Soph. Phil. 72")).unwrap();
        assert_eq!(reference, "tlg5037.tlg006 72");
    }
}
