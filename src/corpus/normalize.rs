// Text cleanup: strip ASCII punctuation, then lowercase.

/// Remove ASCII punctuation and lowercase the rest.
///
/// Punctuation is deleted, not replaced, so `"Hello,World"` becomes the
/// single token `"helloworld"`. Whitespace is left as it was.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    stripped.to_lowercase()
}
