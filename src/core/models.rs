//! Output configuration.

use serde::{Deserialize, Serialize};

/// Controls which optional fields the writers emit.
///
/// # Example
///
/// ```rust
/// use chatvault::core::models::OutputConfig;
///
/// let config = OutputConfig::new().with_index().with_stats();
/// assert!(config.include_index);
/// assert!(config.include_stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit each segment's 0-based position
    pub include_index: bool,
    /// Emit segment counts (JSON import document only)
    pub include_stats: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the `index` field / `Index` column.
    #[must_use]
    pub fn with_index(mut self) -> Self {
        self.include_index = true;
        self
    }

    /// Enables the `stats` object in the JSON import document.
    #[must_use]
    pub fn with_stats(mut self) -> Self {
        self.include_stats = true;
        self
    }

    /// Enables every optional field.
    #[must_use]
    pub fn all() -> Self {
        Self {
            include_index: true,
            include_stats: true,
        }
    }
}
