//! Marker-based transcript segmenter.
//!
//! Some exports put a standalone `Edit` line before every AI turn and nothing
//! before user turns. The text before the first marker is the opening user
//! query; each chunk after a marker is an AI answer, possibly followed by the
//! next user query:
//!
//! ```text
//! How do I reverse a list?
//!
//! Edit
//! Use `list.reverse()`.
//!
//!
//!
//! And for a string?
//!
//! Edit
//! Slice it with `s[::-1]`.
//! ```
//!
//! In the simple format the query is separated from the answer by a gap of
//! three or more newlines. Noisy exports (code-hosting flavored) don't keep
//! that gap, so the query start is found with [`UserQuerySignal`]s instead.
//!
//! A document without any marker line comes back whole as one `user` segment,
//! only normalized.

use tracing::{debug, trace};

use crate::cleanup::{clean_noisy_user_text, clean_text, normalize, normalize_newlines};
use crate::core::consolidate;
use crate::patterns::{
    ExportFormat, UserQuerySignal, find_turn_gap, has_marker_line, marker_line_regex,
};
use crate::segment::Segment;
use crate::segmenter::{Segmenter, StrategyKind};

/// Segmenter for transcripts that mark AI turns with a standalone `Edit` line.
///
/// # Example
///
/// ```rust
/// use chatvault::segmenter::{MarkerSegmenter, Segmenter};
/// use chatvault::Segment;
///
/// let text = "Q1\n\nEdit\nA1\n\n\n\nQ2\n\nEdit\nA2";
/// let segments = MarkerSegmenter::new().segment(text);
/// assert_eq!(
///     segments,
///     vec![
///         Segment::user("Q1"),
///         Segment::assistant("A1"),
///         Segment::user("Q2"),
///         Segment::assistant("A2"),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerSegmenter;

impl MarkerSegmenter {
    /// Creates a new segmenter.
    pub fn new() -> Self {
        Self
    }

    fn split_document(text: &str) -> Vec<Segment> {
        let text = normalize_newlines(text);
        if !has_marker_line(&text) {
            debug!("no marker lines, whole input is one user segment");
            let content = normalize(&text);
            return if content.is_empty() {
                Vec::new()
            } else {
                vec![Segment::user(content)]
            };
        }

        let format = ExportFormat::detect(&text);

        let mut chunks = marker_line_regex().split(&text);
        let mut raw: Vec<Segment> = Vec::new();

        if let Some(opening) = chunks.next() {
            raw.push(Segment::user(clean_user(opening, format)));
        }

        let mut markers = 0usize;
        for chunk in chunks {
            markers += 1;
            let chunk = chunk.trim();
            if chunk.is_empty() {
                continue;
            }
            split_chunk(chunk, format, &mut raw);
        }

        debug!(%format, markers, raw = raw.len(), "marker split");
        consolidate(raw)
    }
}

impl Segmenter for MarkerSegmenter {
    fn name(&self) -> &'static str {
        "Marker"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Marker
    }

    fn segment(&self, text: &str) -> Vec<Segment> {
        Self::split_document(text)
    }
}

fn clean_user(text: &str, format: ExportFormat) -> String {
    match format {
        ExportFormat::Simple => clean_text(text),
        ExportFormat::Noisy => clean_noisy_user_text(text),
    }
}

/// Splits one post-marker chunk into an AI answer and an optional user query.
fn split_chunk(chunk: &str, format: ExportFormat, out: &mut Vec<Segment>) {
    let boundary = match format {
        ExportFormat::Simple => find_turn_gap(chunk).map(|gap| (gap.start, gap.end)),
        ExportFormat::Noisy => match UserQuerySignal::earliest(chunk) {
            Some((signal, at)) if at > 0 => {
                trace!(?signal, at, "user query signal");
                Some((at, at))
            }
            _ => None,
        },
    };

    match boundary {
        Some((ai_end, user_start)) => {
            out.push(Segment::assistant(clean_text(&chunk[..ai_end])));
            out.push(Segment::user(clean_user(&chunk[user_start..], format)));
        }
        None => out.push(Segment::assistant(clean_text(chunk))),
    }
}
