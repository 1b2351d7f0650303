//! Short previews of a segmented conversation.

use crate::segment::Segment;

/// Default summary length in characters.
pub const DEFAULT_SUMMARY_LEN: usize = 200;

/// Number of words taken from the first segment for a title.
pub const TITLE_WORDS: usize = 5;

const ELLIPSIS: &str = "...";

/// Builds a one-line summary from the first two segments.
///
/// Markdown emphasis and heading characters (`#`, `*`, `` ` ``, `_`) are
/// removed, then the text is cut to `max_len` characters with `...` appended
/// when anything was cut.
///
/// ```
/// use chatvault::core::preview::generate_summary;
/// use chatvault::Segment;
///
/// let segments = vec![
///     Segment::user("What is **Rust**?"),
///     Segment::assistant("A `systems` language."),
///     Segment::user("ignored"),
/// ];
/// assert_eq!(
///     generate_summary(&segments, 200),
///     "What is Rust? A systems language."
/// );
/// assert_eq!(generate_summary(&segments, 7), "What is...");
/// ```
pub fn generate_summary(segments: &[Segment], max_len: usize) -> String {
    let joined = segments
        .iter()
        .take(2)
        .map(|s| s.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let stripped: String = joined
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '`' | '_'))
        .collect();
    truncate_chars(&stripped, max_len)
}

/// Builds a title from the first words of the first segment.
///
/// ```
/// use chatvault::core::preview::generate_title;
/// use chatvault::Segment;
///
/// let segments = vec![Segment::user("How do I parse  CSV files in Rust quickly?")];
/// assert_eq!(generate_title(&segments), "How do I parse CSV...");
///
/// let segments = vec![Segment::user("Short question")];
/// assert_eq!(generate_title(&segments), "Short question");
/// ```
pub fn generate_title(segments: &[Segment]) -> String {
    let Some(first) = segments.first() else {
        return String::new();
    };
    let words: Vec<&str> = first.content.split_whitespace().collect();
    let mut title = words
        .iter()
        .take(TITLE_WORDS)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > TITLE_WORDS {
        title.push_str(ELLIPSIS);
    }
    title
}

fn truncate_chars(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}
