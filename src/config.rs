//! Configuration for segmentation.
//!
//! Library-first: no CLI framework types here. The CLI converts its arguments
//! into a [`SegmenterConfig`].
//!
//! # Example
//!
//! ```rust
//! use chatvault::config::SegmenterConfig;
//! use chatvault::segmenter::Strategy;
//! use chatvault::Provider;
//!
//! let config = SegmenterConfig::new()
//!     .with_provider(Provider::Claude)
//!     .with_strategy(Strategy::Prefix)
//!     .with_keep_preamble(true);
//!
//! assert!(config.keep_preamble);
//! ```

use serde::{Deserialize, Serialize};

use crate::Provider;
use crate::segmenter::Strategy;

/// Configuration for [`segment_with`](crate::segment_with).
///
/// # Example
///
/// ```rust
/// use chatvault::config::SegmenterConfig;
///
/// let config = SegmenterConfig::default();
/// assert!(!config.keep_preamble);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Which strategy to run (default: auto-select by content)
    pub strategy: Strategy,

    /// Provider hint for the prefix vocabulary (default: `Other`, auto-detect)
    pub provider: Provider,

    /// Keep text before the first speaker prefix as a leading user segment
    /// (default: false, such text is dropped)
    pub keep_preamble: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            provider: Provider::Other,
            keep_preamble: false,
        }
    }
}

impl SegmenterConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration for a provider hint string.
    ///
    /// Unknown hints select auto-detection.
    pub fn for_hint(hint: &str) -> Self {
        Self::default().with_provider(Provider::from_hint(hint))
    }

    /// Sets the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the provider hint.
    #[must_use]
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    /// Sets whether text before the first prefix is kept.
    #[must_use]
    pub fn with_keep_preamble(mut self, keep: bool) -> Self {
        self.keep_preamble = keep;
        self
    }
}
