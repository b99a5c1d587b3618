//! Text normalization for matching
//!
//! Matching is case-insensitive and ignores surrounding whitespace.

/// Reduce text to its comparison key
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Check if `haystack` contains `needle` after normalizing both
///
/// An empty needle always matches.
pub fn contains(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}

/// Check if two strings share a comparison key
pub fn same_key(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
