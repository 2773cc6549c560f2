use regex::Regex;
use std::sync::LazyLock;

/// An alphabetic token: author, work or abbreviation (`hom.`, `d.l.`, `de_an.`).
const WORD: &str = r"[a-z][a-z.'_]*";
/// A locus component, optionally with a Stephanus/Bekker letter (`327a`).
const NUMBER: &str = r"\d+[a-z]*";

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

regex!(TITLE_TAG_REGEX, r"</?title\b[^>]*>");
regex!(SECTION_REGEX, r"\s*§+\s*");
// A page number followed by its section letter: "327 a" is one locus.
regex!(STEPHANUS_REGEX, r"(\d)\s+([a-z])\b");
regex!(WHITESPACE_REGEX, r"\s+");
regex!(CONTINUATION_REGEX, r"(\d)\s*ff\.?$");
// Catalogue author and work numbers, e.g. tlg0012.tlg002 or phi0690.phi003.
regex!(CORPUS_CODE_REGEX, r"\b([a-z]+)(\d{4})\.([a-z]+)(\d{3})\b");

// Reference shapes, most specific first.
regex!(MANY_WORDS_TWO_NUMBERS_REGEX, format!(r"^(?:{WORD}\s+)+{WORD}\s+{NUMBER}\.{NUMBER}").as_str());
regex!(MANY_WORDS_ONE_NUMBER_REGEX, format!(r"^(?:{WORD}\s+)+{WORD}\s+{NUMBER}").as_str());
regex!(ONE_WORD_TWO_NUMBERS_REGEX, format!(r"^{WORD}\s+{NUMBER}\.{NUMBER}").as_str());
regex!(ONE_WORD_ONE_NUMBER_REGEX, format!(r"^{WORD}\s+{NUMBER}").as_str());
