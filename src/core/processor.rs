//! Segment consolidation and statistics.

use serde::{Deserialize, Serialize};

use crate::segment::{Role, Segment};
use crate::segmenter::StrategyKind;

/// Merges runs of same-speaker segments and drops empty ones.
///
/// Merged content is joined with a blank line. Segments whose content is
/// empty or whitespace-only are discarded before merging, so the result never
/// has two adjacent segments with the same role.
///
/// # Example
///
/// ```rust
/// use chatvault::core::consolidate;
/// use chatvault::Segment;
///
/// let segments = vec![
///     Segment::user("Q"),
///     Segment::assistant("A1"),
///     Segment::user("   "),
///     Segment::assistant("A2"),
/// ];
/// let merged = consolidate(segments);
/// assert_eq!(merged, vec![Segment::user("Q"), Segment::assistant("A1\n\nA2")]);
/// ```
pub fn consolidate(segments: Vec<Segment>) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());

    for segment in segments {
        let content = segment.content.trim();
        if content.is_empty() {
            continue;
        }
        match merged.last_mut() {
            Some(last) if last.role == segment.role => {
                last.content.push_str("\n\n");
                last.content.push_str(content);
            }
            _ => merged.push(Segment::new(segment.role, content)),
        }
    }

    merged
}

/// Counts for one segmentation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentStats {
    /// Number of segments.
    pub total: usize,
    /// Number of `user` segments.
    pub user: usize,
    /// Number of `assistant` segments.
    pub assistant: usize,
    /// Strategy that produced the segments.
    pub strategy: StrategyKind,
}

impl SegmentStats {
    /// Counts segments by role.
    pub fn collect(segments: &[Segment], strategy: StrategyKind) -> Self {
        let user = segments.iter().filter(|s| s.role == Role::User).count();
        Self {
            total: segments.len(),
            user,
            assistant: segments.len() - user,
            strategy,
        }
    }

    /// Total characters of segment content.
    pub fn content_chars(segments: &[Segment]) -> usize {
        segments.iter().map(|s| s.content.chars().count()).sum()
    }

    /// Share of segments spoken by the user, in percent.
    pub fn user_share(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.user as f64 / self.total as f64 * 100.0
    }
}
