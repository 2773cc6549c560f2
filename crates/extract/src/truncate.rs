//! Truncation of markup snippets for the outcome logs.

use memchr::memrchr;

/// Default size of the markup context stored with every outcome entry.
pub const DEFAULT_CONTEXT_BYTES: usize = 4 * 1024;

/// Truncates `markup` to at most `max_bytes`, backing off so the cut never
/// lands inside a tag, an entity or a multi-byte character.
///
/// # Examples
///
/// ```rust
/// use locus_extract::safe_markup_truncate;
/// let markup = "<cit><quote>μῆνιν</quote></cit>";
/// // Never cuts mid-tag.
/// assert_eq!(safe_markup_truncate(markup, 8), "<cit>");
/// // Never cuts mid-character: "μ" is two bytes.
/// assert_eq!(safe_markup_truncate(markup, 13), "<cit><quote>");
/// ```
pub fn safe_markup_truncate(markup: &str, max_bytes: usize) -> &str {
    if markup.len() <= max_bytes {
        return markup;
    }
    let boundary = (0..=max_bytes).rev().find(|&index| markup.is_char_boundary(index)).unwrap_or(0);
    let candidate = &markup[..boundary];
    let bytes = candidate.as_bytes();
    if let Some(open_tag) = memrchr(b'<', bytes)
        && memrchr(b'>', bytes).is_none_or(|close_tag| close_tag < open_tag)
    {
        return &candidate[..open_tag];
    }
    if let Some(ampersand) = memrchr(b'&', bytes)
        && memrchr(b';', bytes).is_none_or(|semicolon| semicolon < ampersand)
    {
        return &candidate[..ampersand];
    }
    candidate
}
