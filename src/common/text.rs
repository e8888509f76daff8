use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Delimiters accepted between image URLs in an `image_refs` field.
pub const IMAGE_REF_DELIMITERS: [char; 3] = [';', ',', '|'];

/// Lowercased search needle, or `None` when the text is blank.
pub fn search_needle(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive containment. `needle` must already be lowercase.
/// An absent haystack never matches.
pub fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.map_or(false, |h| h.to_lowercase().contains(needle))
}

/// Trimmed copy of `value`, or `None` when nothing is left.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// First non-empty entry of a delimited image list.
pub fn first_image(refs: Option<&str>) -> Option<&str> {
    refs?
        .split(&IMAGE_REF_DELIMITERS[..])
        .map(str::trim)
        .find(|part| !part.is_empty())
}

/// Sort key that ignores case and accents: "Ábside" sorts with "abside".
pub fn collation_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Locale-style comparison: accent and case-insensitive first, then by the
/// raw text so that distinct strings never compare equal.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
