//! Clean-up applied to raw citation text before any lookup.
//!
//! Each step is a pure function; [`normalize`] runs all of them in order.

use crate::consts::{CONTINUATION_REGEX, SECTION_REGEX, STEPHANUS_REGEX, TITLE_TAG_REGEX, WHITESPACE_REGEX};

pub fn normalize(reference: &str) -> String {
    let reference = reference.to_lowercase();
    let reference = strip_title_tags(reference.trim());
    let reference = strip_parentheses(&reference);
    let reference = collapse_commas(&reference);
    let reference = section_symbols(&reference);
    let reference = close_up_stephanus(&reference);
    collapse_whitespace(&reference)
}

/// Removes `<title>` markup left over from the surrounding document.
pub fn strip_title_tags(reference: &str) -> String {
    TITLE_TAG_REGEX.replace_all(reference, "").into_owned()
}

pub fn strip_parentheses(reference: &str) -> String {
    reference.replace(['(', ')'], "")
}

pub fn collapse_commas(reference: &str) -> String {
    reference.replace(", ", " ")
}

/// `dem. 18 § 5` cites the same passage as `dem. 18.5`.
pub fn section_symbols(reference: &str) -> String {
    SECTION_REGEX.replace_all(reference, ".").into_owned()
}

pub fn close_up_stephanus(reference: &str) -> String {
    STEPHANUS_REGEX.replace_all(reference, "${1}${2}").into_owned()
}

pub fn collapse_whitespace(reference: &str) -> String {
    WHITESPACE_REGEX.replace_all(reference.trim(), " ").into_owned()
}

/// Attaches a trailing "and following" marker to its number: `4.66 ff.`
/// becomes `4.66ff`.
pub fn mark_continuation(reference: &str) -> String {
    CONTINUATION_REGEX.replace(reference, "${1}ff").into_owned()
}
