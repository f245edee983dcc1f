/// Normalize a catalog name for comparison.
///
/// Lowercases and collapses every whitespace run to a single space, so
/// `"  Table   Tennis(Singles) "` and `"table tennis(singles)"` compare equal.
/// Punctuation is left alone: this is an exact match, not a fuzzy one.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compare two names with the same rules as [`normalize_name`].
pub fn names_match(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}
