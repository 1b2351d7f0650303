//! Transcript segmentation strategies.
//!
//! Two strategies turn raw transcript text into an ordered `Vec<Segment>`:
//!
//! - [`PrefixParser`] - speaker prefixes at line start (`User:`, `ChatGPT:`,
//!   `Human:`, `Claude:`, ...), with paragraph alternation and whole-input
//!   fallbacks.
//! - [`MarkerSegmenter`] - standalone `Edit` marker lines, with a noisy-export
//!   sub-format and consolidation of same-speaker runs.
//!
//! Both implement [`Segmenter`]. [`select_strategy`] sniffs the content and
//! picks one; [`segment_with`] runs the configured or selected strategy.
//!
//! # Example
//!
//! ```rust
//! use chatvault::segmenter::{Strategy, StrategyKind, select_strategy, segment_transcript};
//! use chatvault::Role;
//!
//! let text = "User: hi\nChatGPT: hello";
//! assert_eq!(select_strategy(text), StrategyKind::Prefix);
//!
//! let segments = segment_transcript(text, "chatgpt");
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[1].role, Role::Assistant);
//! ```

mod marker;
mod prefix;

pub use marker::MarkerSegmenter;
pub use prefix::PrefixParser;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Provider;
use crate::config::SegmenterConfig;
use crate::patterns::has_marker_line;
use crate::segment::Segment;

/// Which strategy to run, as requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Marker segmenter if the text has an `Edit` marker line, prefix parser
    /// otherwise.
    #[default]
    Auto,
    /// Always the prefix parser.
    Prefix,
    /// Always the marker segmenter.
    Marker,
}

impl Strategy {
    /// Returns all strategy names.
    pub fn all_names() -> &'static [&'static str] {
        &["auto", "prefix", "marker"]
    }

    /// Resolves `Auto` against the text; explicit choices pass through.
    pub fn resolve(self, text: &str) -> StrategyKind {
        match self {
            Strategy::Auto => select_strategy(text),
            Strategy::Prefix => StrategyKind::Prefix,
            Strategy::Marker => StrategyKind::Marker,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Auto => write!(f, "auto"),
            Strategy::Prefix => write!(f, "prefix"),
            Strategy::Marker => write!(f, "marker"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Strategy::Auto),
            "prefix" => Ok(Strategy::Prefix),
            "marker" | "edit" => Ok(Strategy::Marker),
            _ => Err(format!(
                "Unknown strategy: '{}'. Expected one of: {}",
                s,
                Strategy::all_names().join(", ")
            )),
        }
    }
}

/// A concrete strategy, after `Auto` has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// [`PrefixParser`]
    Prefix,
    /// [`MarkerSegmenter`]
    Marker,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Prefix => write!(f, "prefix"),
            StrategyKind::Marker => write!(f, "marker"),
        }
    }
}

/// A segmentation strategy.
///
/// Implementations are pure: the same text always yields the same segments,
/// and they hold no state between calls.
pub trait Segmenter: Send + Sync {
    /// Returns the human-readable name of this segmenter.
    fn name(&self) -> &'static str;

    /// Returns which strategy this is.
    fn kind(&self) -> StrategyKind;

    /// Splits `text` into ordered speaker-attributed segments.
    ///
    /// Never fails. Blank input yields an empty vector.
    fn segment(&self, text: &str) -> Vec<Segment>;
}

/// Picks a strategy by sniffing the text.
///
/// Any line consisting solely of the `Edit` marker selects the marker
/// segmenter; everything else goes to the prefix parser.
pub fn select_strategy(text: &str) -> StrategyKind {
    if has_marker_line(text) {
        StrategyKind::Marker
    } else {
        StrategyKind::Prefix
    }
}

/// Creates the segmenter for a strategy.
///
/// # Example
///
/// ```rust
/// use chatvault::config::SegmenterConfig;
/// use chatvault::segmenter::{StrategyKind, create_segmenter};
///
/// let segmenter = create_segmenter(StrategyKind::Marker, &SegmenterConfig::new());
/// assert_eq!(segmenter.name(), "Marker");
/// ```
pub fn create_segmenter(kind: StrategyKind, config: &SegmenterConfig) -> Box<dyn Segmenter> {
    match kind {
        StrategyKind::Prefix => Box::new(PrefixParser::with_config(config)),
        StrategyKind::Marker => Box::new(MarkerSegmenter::new()),
    }
}

/// Segments a transcript using a provider hint string.
///
/// Unknown hints select prefix auto-detection. The strategy is chosen by
/// [`select_strategy`].
pub fn segment_transcript(raw_text: &str, provider_hint: &str) -> Vec<Segment> {
    segment_with(raw_text, &SegmenterConfig::for_hint(provider_hint))
}

/// Segments a transcript with an explicit configuration.
pub fn segment_with(raw_text: &str, config: &SegmenterConfig) -> Vec<Segment> {
    let kind = config.strategy.resolve(raw_text);
    debug!(
        strategy = %kind,
        requested = %config.strategy,
        provider = config.provider.id(),
        bytes = raw_text.len(),
        "segmenting transcript"
    );
    create_segmenter(kind, config).segment(raw_text)
}

/// Output of both strategies on the same text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyComparison {
    /// What [`select_strategy`] would choose.
    pub selected: StrategyKind,
    /// Prefix parser output.
    pub prefix: Vec<Segment>,
    /// Marker segmenter output.
    pub marker: Vec<Segment>,
}

impl StrategyComparison {
    /// Output of the strategy that auto-selection would run.
    pub fn selected_segments(&self) -> &[Segment] {
        match self.selected {
            StrategyKind::Prefix => &self.prefix,
            StrategyKind::Marker => &self.marker,
        }
    }

    /// Returns `true` if both strategies produced identical segments.
    pub fn agree(&self) -> bool {
        self.prefix == self.marker
    }
}

/// Runs both strategies on the same text.
pub fn compare_strategies(raw_text: &str, provider: Provider) -> StrategyComparison {
    StrategyComparison {
        selected: select_strategy(raw_text),
        prefix: PrefixParser::new(provider).segment(raw_text),
        marker: MarkerSegmenter::new().segment(raw_text),
    }
}
