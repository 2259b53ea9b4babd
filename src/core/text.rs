/// Tokens shorter than this are too generic to count as keywords
pub const MIN_KEYWORD_CHARS: usize = 4;

/// Lower-case and trim text before any comparison
#[inline]
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Whitespace-separated tokens of `text` long enough to be specific
///
/// Length is counted in characters, so accented terms are not penalised
/// for their byte width.
pub fn keywords(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|token| token.chars().count() >= MIN_KEYWORD_CHARS)
}

/// Bidirectional substring containment
#[inline]
pub fn contains_either_way(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
