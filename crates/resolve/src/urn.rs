use exn::{OptionExt, ResultExt};
use locus_lexicon::{Namespace, WorkCode};
use tracing::instrument;

use crate::author::{MAX_AUTHOR_WORDS, match_author};
use crate::consts::CORPUS_CODE_REGEX;
use crate::error::{ErrorKind, Result};
use crate::locus::{format_range, numeric_locus, starts_with_digit};
use crate::normalize::{collapse_whitespace, mark_continuation};
use crate::{Context, Resolver};

/// Longest multi-word title absorbed into a single work token.
const MAX_TITLE_WORDS: usize = 3;
const WORK_PREFIXES: [&str; 3] = ["tlg", "phi", "stoa"];

impl Resolver<'_> {
    /// Builds the canonical URN for one reference.
    ///
    /// A citation that cannot be resolved is logged as a warning carrying the
    /// reference, the surrounding `context` and the reason, and yields
    /// `Ok(None)`. `Err` is reserved for input or tables that are broken
    /// beyond one citation, see [`ErrorKind::is_fatal`].
    #[instrument(skip(self, context), fields(filename = context.filename))]
    pub fn build_urn(&self, reference: &str, context: &Context<'_>) -> Result<Option<String>> {
        match self.urn(reference) {
            Ok(urn) => {
                tracing::debug!(urn = %urn, "resolved citation");
                Ok(Some(urn))
            },
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                let reason: &ErrorKind = &err;
                tracing::warn!(
                    reference,
                    filename = context.filename,
                    content = context.content,
                    reason = %reason,
                    "could not resolve citation",
                );
                Ok(None)
            },
        }
    }

    fn urn(&self, reference: &str) -> Result<String> {
        let reference = mark_continuation(&collapse_whitespace(&reference.to_lowercase()));
        if reference.is_empty() {
            exn::bail!(ErrorKind::EmptyReference);
        }
        if let Some(urn) = embedded_code_urn(&reference)? {
            return Ok(urn);
        }

        let tokens: Vec<&str> = reference.split_whitespace().collect();
        let author = match_author(self.lexicon, &tokens, MAX_AUTHOR_WORDS)?;
        let stem = self.lexicon.author_stem(author.key).ok_or_raise(|| ErrorKind::MissingStem(author.key))?;
        let namespace = Namespace::from_stem(stem);
        let rest = &tokens[author.span..];

        if self.lexicon.is_single_work(author.key) {
            let locus = numeric_locus(rest).ok_or_raise(|| ErrorKind::MissingLocus)?;
            return Ok(compose(stem, namespace, namespace.default_work(), &locus));
        }

        let (work, locus) = self.split_work(author.key, rest)?;
        let (code, locus) = self.work_code(author.key, stem, &work, locus)?;
        Ok(compose(stem, namespace, code.as_deref(), &format_range(&locus)))
    }

    /// Splits the tokens after the author into one work token and one dotted
    /// locus. Multi-word titles are joined with `_`.
    #[instrument(level = "trace", skip(self))]
    fn split_work(&self, author: &str, rest: &[&str]) -> Result<(String, String)> {
        let alphabetic = rest.iter().take_while(|token| !starts_with_digit(token)).count();
        let title_words = if alphabetic > 1 {
            (2..=alphabetic.min(MAX_TITLE_WORDS))
                .rev()
                .find(|&words| self.lookup_title(author, &rest[..words].join("_")).is_some())
                .unwrap_or(alphabetic)
        } else {
            alphabetic
        };
        let numbers = &rest[title_words..];
        if !numbers.iter().all(|token| starts_with_digit(token)) {
            exn::bail!(ErrorKind::WrongFormat);
        }
        let work = rest[..title_words].join("_");
        let locus = numbers
            .iter()
            .map(|token| token.trim_matches('.'))
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>()
            .join(".");

        match (work.is_empty(), locus.is_empty()) {
            (false, false) => Ok((work, locus)),
            (true, true) => exn::bail!(ErrorKind::MissingLocus),
            // A single "work.locus" token, as in "od.4.66" or "29.2".
            _ => {
                let joined = if work.is_empty() { locus } else { work };
                let (work, locus) = joined
                    .split_once('.')
                    .filter(|(work, locus)| !work.is_empty() && !locus.is_empty())
                    .ok_or_raise(|| ErrorKind::WrongFormat)?;
                Ok((work.to_string(), locus.to_string()))
            },
        }
    }

    /// Resolves a work token to its identifier, returning the locus left
    /// over once any part of it has been used to pick the work.
    #[instrument(level = "trace", skip(self, stem))]
    fn work_code(&self, author: &str, stem: &str, work: &str, locus: String) -> Result<(Option<String>, String)> {
        if let Some(code) = self.lookup_title(author, work) {
            return apply_code(code, locus);
        }
        if work.chars().all(|c| c.is_ascii_digit()) {
            return Ok((Some(numbered_work(stem, work)), locus));
        }
        // "letter 7.7" cites letter_7, section 7.
        if let Some((number, remainder)) = locus.split_once('.')
            && let Some(code) = self.lookup_title(author, &format!("{work}_{number}"))
        {
            return apply_code(code, remainder.to_string());
        }
        tracing::warn!(author, work, "work not recognized");
        Ok((None, locus))
    }

    fn lookup_title(&self, author: &str, title: &str) -> Option<WorkCode> {
        if let Some(code) = self.lexicon.work(author, title) {
            return Some(code);
        }
        // "oed. tyr." is cited as two words but generated as "oed.tyr."
        title.contains("._").then(|| self.lexicon.work(author, &title.replace("._", "."))).flatten()
    }
}

fn apply_code(code: WorkCode, locus: String) -> Result<(Option<String>, String)> {
    match code {
        WorkCode::Code(literal) => Ok((Some(literal.to_string()), locus)),
        WorkCode::Collection { .. } => {
            let (position, remainder) = locus.split_once('.').ok_or_raise(|| ErrorKind::MissingLocus)?;
            let index = position.parse::<u32>().or_raise(|| ErrorKind::WrongFormat)?;
            let member = code.member(index).ok_or_raise(|| ErrorKind::OutsideCollection { index })?;
            Ok((Some(member), remainder.to_string()))
        },
    }
}

/// `29` under a `tlg` author is `tlg029`.
fn numbered_work(stem: &str, number: &str) -> String {
    let prefix = WORK_PREFIXES.into_iter().find(|prefix| stem.contains(prefix)).unwrap_or_default();
    format!("{prefix}{number:0>3}")
}

fn compose(stem: &str, namespace: Namespace, work: Option<&str>, locus: &str) -> String {
    let work = work.unwrap_or_default();
    match namespace.edition_suffix() {
        Some(edition) => format!("{stem}.{work}.{edition}:{locus}"),
        None => {
            let urn = format!("{stem}.{work}:{locus}");
            tracing::warn!(urn = %urn, "no edition for the corpus of this citation URN");
            urn
        },
    }
}

/// URN for a reference that already carries catalogue numbers, such as
/// `tlg5037.tlg006 72` or a full URN.
fn embedded_code_urn(reference: &str) -> Result<Option<String>> {
    let Some(captures) = CORPUS_CODE_REGEX.captures(reference) else {
        return Ok(None);
    };
    let whole = captures.get_match();
    let (code, [author_prefix, author_number, work_prefix, work_number]) = captures.extract();
    let (namespace, edition) = match (author_prefix, work_prefix) {
        ("tlg", "tlg") => ("greekLit", "perseus-grc2"),
        ("phi" | "stoa", "phi" | "stoa") => ("latinLit", "perseus-lat2"),
        _ => exn::bail!(ErrorKind::UnhandledCorpus(code.to_string())),
    };

    let trailing = &reference[whole.end()..];
    // Skip the edition of a full URN: ".perseus-grc2:4.66".
    let trailing = match trailing.strip_prefix('.') {
        Some(rest) => rest.split_once(':').map_or(rest, |(_, locus)| locus),
        None => trailing,
    };
    let locus = trailing.trim_start_matches([':', ' ']).split_whitespace().collect::<Vec<_>>().join(".");
    if locus.is_empty() {
        exn::bail!(ErrorKind::MissingLocus);
    }
    Ok(Some(format!(
        "urn:cts:{namespace}:{author_prefix}{author_number}.{work_prefix}{work_number}.{edition}:{}",
        format_range(&locus)
    )))
}
