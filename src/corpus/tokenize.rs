// Whitespace tokenization shared by the loader, vocabulary and vectorizer.

/// Whether `c` separates tokens.
///
/// Unicode whitespace plus the ASCII file, group, record and unit separators
/// (U+001C..=U+001F), which also count as line breaks in Python-style
/// `str.split()` text handling.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split text into tokens on runs of separators. Never yields an empty token.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|t| !t.is_empty())
}
