//! Verse splitting and pagination of song text.
//!
//! Stored text may contain real newlines or the two-character escape `\n`
//! (backslash, `n`). Both are treated as line breaks; a blank line separates
//! verses.

use crate::domain::value_objects::Pagination;

/// Escaped newline as it appears in stored text.
const ESCAPED_NEWLINE: &str = "\\n";

/// Blank line between two verses.
pub const VERSE_SEPARATOR: &str = "\n\n";

/// Split text into verses, dropping one trailing line break per verse.
pub fn split_verses(text: &str) -> Vec<String> {
    text.replace(ESCAPED_NEWLINE, "\n")
        .split(VERSE_SEPARATOR)
        .map(|verse| verse.strip_suffix('\n').unwrap_or(verse).to_string())
        .collect()
}

/// The verses on the requested page, joined by a blank line.
///
/// Returns `None` when the page starts past the last verse.
pub fn verse_page(text: &str, pagination: Pagination) -> Option<String> {
    let verses = split_verses(text);
    let window = pagination.window(verses.len())?;
    Some(verses[window].join(VERSE_SEPARATOR))
}
