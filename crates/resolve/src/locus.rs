//! Passage locus helpers.

pub(crate) fn starts_with_digit(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_digit())
}

/// Dotted locus made of every numeric component in `tokens`; alphabetic
/// tokens are ignored.
pub(crate) fn numeric_locus(tokens: &[&str]) -> Option<String> {
    let components: Vec<&str> = tokens
        .iter()
        .flat_map(|token| token.split(['.', ',', ':', ';']))
        .filter(|component| starts_with_digit(component))
        .collect();
    (!components.is_empty()).then(|| format_range(&components.join(".")))
}

/// Qualifies the end of a range with the hierarchy of its start:
/// `4.12-15` becomes `4.12-4.15`. Anything else passes through, including a
/// trailing `ff`.
pub(crate) fn format_range(locus: &str) -> String {
    let locus = locus.replace('–', "-");
    match locus.split_once('-') {
        Some((start, end)) if !end.contains('.') => match start.rsplit_once('.') {
            Some((parent, _)) => format!("{start}-{parent}.{end}"),
            None => locus,
        },
        _ => locus,
    }
}
