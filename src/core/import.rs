//! Import document: segments plus the metadata a chat library stores.
//!
//! This is the caller-side contract of segmentation. An empty segment list
//! means "nothing to import" and becomes [`ChatvaultError::EmptyTranscript`].

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::Provider;
use crate::config::SegmenterConfig;
use crate::core::preview::{DEFAULT_SUMMARY_LEN, generate_summary, generate_title};
use crate::core::processor::SegmentStats;
use crate::error::{ChatvaultError, Result};
use crate::segment::Segment;

/// A segmented conversation ready to be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatImport {
    /// First words of the opening segment.
    pub title: String,
    /// Preview built from the first two segments.
    pub summary: String,
    /// Product the transcript came from.
    pub provider: Provider,
    /// Ordered speaker-attributed segments, never empty.
    pub messages: Vec<Segment>,
    /// Segment counts.
    pub stats: SegmentStats,
}

impl ChatImport {
    /// Number of segments.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always `false` for a value built by [`import_transcript`].
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Segments `raw_text` and wraps the result with title, summary and stats.
///
/// The provider recorded in the document is `provider`; the prefix vocabulary
/// and strategy come from `config`.
///
/// # Errors
///
/// Returns [`ChatvaultError::EmptyTranscript`] if segmentation produced
/// nothing (blank input).
///
/// # Example
///
/// ```rust
/// use chatvault::config::SegmenterConfig;
/// use chatvault::{import_transcript, Provider};
///
/// let config = SegmenterConfig::new().with_provider(Provider::ChatGpt);
/// let import = import_transcript("User: hi\nChatGPT: hello", Provider::ChatGpt, &config)?;
/// assert_eq!(import.title, "hi");
/// assert_eq!(import.summary, "hi hello");
/// assert_eq!(import.len(), 2);
///
/// assert!(import_transcript("   ", Provider::ChatGpt, &config).is_err());
/// # Ok::<(), chatvault::ChatvaultError>(())
/// ```
pub fn import_transcript(
    raw_text: &str,
    provider: Provider,
    config: &SegmenterConfig,
) -> Result<ChatImport> {
    let strategy = config.strategy.resolve(raw_text);
    let messages = crate::segmenter::segment_with(raw_text, config);
    if messages.is_empty() {
        return Err(ChatvaultError::EmptyTranscript);
    }

    let stats = SegmentStats::collect(&messages, strategy);
    info!(
        provider = provider.id(),
        strategy = %strategy,
        segments = stats.total,
        "transcript imported"
    );

    Ok(ChatImport {
        title: generate_title(&messages),
        summary: generate_summary(&messages, DEFAULT_SUMMARY_LEN),
        provider,
        messages,
        stats,
    })
}
