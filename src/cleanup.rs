//! Text cleanup applied to segment content.
//!
//! Three layers, each building on the previous one:
//!
//! - [`normalize`] - collapse runs of 3+ newlines to a blank line and trim.
//!   Every strategy applies it.
//! - [`clean_text`] - also strips copy-paste artifacts (a trailing page number,
//!   a trailing `Claude` signature line). Marker exports.
//! - [`clean_noisy_user_text`] - also strips the attachment headers and retry
//!   noise that code-hosting-flavored exports put around user queries.
//!
//! [`normalize`] is idempotent. The stripping layers remove at most one
//! artifact of each kind per call.

use std::sync::OnceLock;

use regex::Regex;

fn excess_newlines() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("valid regex"))
}

fn trailing_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\d+\s*\z").expect("valid regex"))
}

fn trailing_signature() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:\A|\n)[ \t]*Claude\s*\z").expect("valid regex"))
}

fn content_not_accessible() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\AContent not accessible\s*").expect("valid regex"))
}

fn github_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\AGITHUB[ \t]*(?:\n|\z)").expect("valid regex"))
}

fn lone_retry() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?im)^[ \t]*Retry[ \t]*$").expect("valid regex"))
}

fn show_items() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)Show \d+ Items?\s*\z").expect("valid regex"))
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

/// Collapses 3+ consecutive newlines to exactly two and trims.
///
/// ```
/// use chatvault::cleanup::normalize;
///
/// assert_eq!(normalize("  a\n\n\n\n\nb  "), "a\n\nb");
/// ```
pub fn normalize(text: &str) -> String {
    excess_newlines()
        .replace_all(text.trim(), "\n\n")
        .trim()
        .to_string()
}

/// Strips copy-paste artifacts, then [`normalize`]s.
///
/// Removes, in order:
/// 1. a trailing line holding only a number (page numbering),
/// 2. a trailing line holding only `Claude` (the export's signature).
///
/// ```
/// use chatvault::cleanup::clean_text;
///
/// assert_eq!(clean_text("Answer text\n\n12"), "Answer text");
/// assert_eq!(clean_text("Answer text\nClaude"), "Answer text");
/// assert_eq!(clean_text("Ask Claude"), "Ask Claude");
/// ```
pub fn clean_text(text: &str) -> String {
    let trimmed = text.trim();
    let without_number = trailing_number().replace(trimmed, "");
    let without_signature = trailing_signature().replace(&without_number, "");
    normalize(&without_signature)
}

/// Strips noisy-export headers from a user query, then [`clean_text`]s.
///
/// Removes a leading `Content not accessible` line, a leading `GITHUB` line,
/// the first line holding only `Retry`, and a trailing `Show N Item(s)`.
///
/// ```
/// use chatvault::cleanup::clean_noisy_user_text;
///
/// let raw = "Content not accessible\nGITHUB\nRetry\nWhy does the build fail?\nShow 3 Items";
/// assert_eq!(clean_noisy_user_text(raw), "Why does the build fail?");
/// ```
pub fn clean_noisy_user_text(text: &str) -> String {
    let trimmed = text.trim();
    let cleaned = content_not_accessible().replace(trimmed, "");
    let cleaned = github_label().replace(&cleaned, "");
    let cleaned = lone_retry().replacen(&cleaned, 1, "");
    let cleaned = show_items().replace(&cleaned, "");
    clean_text(&cleaned)
}
