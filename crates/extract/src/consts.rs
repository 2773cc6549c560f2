use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

regex!(CIT_REGEX, r"(?s)<cit\b.*?</cit>");
regex!(QUOTE_REGEX, r"(?s)<quote\b[^>]*>(.*?)</quote>");
// Attribute form of the locus: `<bibl n="Od. 1.85">`.
regex!(BIBL_N_REGEX, r#"<bibl\b[^>]*?\sn="([^"]*)""#);
// Inline form of the locus: `<bibl>Od. 1.85</bibl>`.
regex!(BIBL_TEXT_REGEX, r"(?s)<bibl\b[^>]*>(.*?)</bibl>");
