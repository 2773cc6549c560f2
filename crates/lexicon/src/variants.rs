//! Generated title spellings.
//!
//! Commentaries abbreviate work titles inconsistently (`Od.`, `Nic. Eth.`,
//! `Hist. An.`, `W&D`), so every explicit title is expanded into the informal
//! forms a reader is likely to have typed.

use tracing::instrument;

const STOP_WORDS: [&str; 11] = ["the", "a", "an", "of", "in", "by", "for", "on", "and", "de", "ad"];
/// Particles that may lead a suspended title (`de_an.` for *De Anima*).
const PARTICLES: [&str; 2] = ["de", "on"];
const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];
const PLOSIVES: [char; 8] = ['t', 'p', 'd', 'g', 'k', 'x', 'c', 'b'];

/// Insertion-ordered set of candidate spellings.
#[derive(Default)]
struct Variants(Vec<String>);

impl Variants {
    fn push(&mut self, variant: impl Into<String>) {
        let variant = variant.into();
        if !variant.is_empty() && !self.0.contains(&variant) {
            self.0.push(variant);
        }
    }

    fn push_initials<'a>(&mut self, words: impl Iterator<Item = &'a str>) {
        let initials: Vec<char> = words.filter_map(|word| word.chars().next()).collect();
        if initials.is_empty() {
            return;
        }
        let joined = |separator: &str| initials.iter().map(char::to_string).collect::<Vec<_>>().join(separator);
        self.push(joined(""));
        self.push(format!("{}.", joined(".")));
        self.push(joined("_"));
        self.push(format!("{}.", joined("._")));
    }
}

/// Every informal spelling generated for `title`, in a stable order.
///
/// Numeric titles generate nothing. The explicit title itself is never part of
/// the output.
#[instrument(level = "trace")]
pub(crate) fn transform_title(title: &str) -> Vec<String> {
    let words: Vec<&str> = title.split_whitespace().collect();
    let Some(first_word) = words.first() else {
        return Vec::new();
    };
    if title.chars().all(|c| c.is_ascii_digit()) {
        return Vec::new();
    }
    let mut variants = Variants::default();

    if let [word] = words.as_slice() {
        if let Some(stem) = word.strip_suffix('s') {
            variants.push(format!("{stem}a"));
        } else if let Some(stem) = word.strip_suffix('a') {
            variants.push(format!("{stem}s"));
        }
    }

    variants.push_initials(words.iter().copied());
    if words.iter().any(|word| STOP_WORDS.contains(word)) {
        variants.push_initials(words.iter().copied().filter(|word| !STOP_WORDS.contains(word)));
    }

    let first_word_length = first_word.chars().count();
    for (length, longer_than) in [(1, 0), (2, 0), (3, 2), (4, 3), (5, 4), (6, 5)] {
        if first_word_length > longer_than {
            let prefix: String = first_word.chars().take(length).collect();
            variants.push(format!("{prefix}."));
            variants.push(prefix);
        }
    }

    if words.len() > 1 {
        variants.push(*first_word);
    }
    if words.len() > 2 {
        variants.push(words[..2].join("_"));
    }
    if words.len() > 3 {
        variants.push(words[..3].join("_"));
    }

    if let Some(suspended) = smart_suspend(title, false) {
        variants.push(suspended);
    }
    if let Some(suspended) = smart_suspend(title, true) {
        variants.push(suspended);
    }

    if words.len() > 1 {
        variants.push(words.join("_"));
    }

    variants.0.retain(|variant| variant != title);
    variants.0
}

/// Abbreviates each significant word of `title` to its leading syllable and
/// joins the pieces with `.` (`historia animalium` becomes `hist.an.`).
///
/// With `keep_particles`, a leading `de`/`on` survives in full and is attached
/// with an underscore (`de anima` becomes `de_an.`). Returns `None` when no
/// significant word remains.
pub fn smart_suspend(title: &str, keep_particles: bool) -> Option<String> {
    let mut pieces: Vec<String> = Vec::new();
    for word in title.split([' ', '_']).filter(|word| !word.is_empty()) {
        if PARTICLES.contains(&word) {
            if keep_particles {
                pieces.push(word.to_string());
            }
            continue;
        }
        if STOP_WORDS.contains(&word) {
            continue;
        }
        pieces.push(suspend_word(word));
    }
    let (first, rest) = pieces.split_first()?;
    if PARTICLES.contains(&first.as_str()) {
        if rest.is_empty() {
            return None;
        }
        return Some(format!("{first}_{}.", rest.join(".")));
    }
    Some(format!("{}.", pieces.join(".")))
}

/// Leading run of `word` up to the end of its first syllable.
fn suspend_word(word: &str) -> String {
    let mut run = String::new();
    let mut seen_vowel = false;
    let mut after_consonant = false;
    for c in word.chars() {
        if VOWELS.contains(&c) {
            if seen_vowel && after_consonant {
                break;
            }
            seen_vowel = true;
            after_consonant = false;
            run.push(c);
        } else if seen_vowel && PLOSIVES.contains(&c) {
            run.push(c);
            break;
        } else {
            after_consonant = true;
            run.push(c);
        }
    }
    run
}
