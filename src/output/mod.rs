// Output formatting — terminal display of the bag-of-words report.

pub mod terminal;

/// The first `max_chars` characters of `text`.
///
/// Unlike byte slicing (`&text[..80]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like curly quotes or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
