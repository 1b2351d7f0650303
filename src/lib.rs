//! # Chatvault
//!
//! Split pasted LLM chat transcripts into ordered, speaker-attributed
//! segments.
//!
//! ## Overview
//!
//! Text copied out of ChatGPT, Claude or Grok has no reliable delimiter
//! between turns. Chatvault recovers the structure with two strategies:
//!
//! - **Prefix parser** - speaker prefixes at line start (`User:`, `ChatGPT:`,
//!   `Human:`, `Claude:`, ...). Providers without a fixed vocabulary are
//!   auto-detected.
//! - **Marker segmenter** - a standalone `Edit` line before each AI turn,
//!   including a noisy code-hosting-flavored export variant.
//!
//! Segmentation never fails. When no structure is found it falls back to
//! paragraph alternation and finally to the whole input as one `user`
//! segment. Blank input yields an empty list, which the import layer reports
//! as [`ChatvaultError::EmptyTranscript`].
//!
//! ## Quick Start
//!
//! ```rust
//! use chatvault::{segment_transcript, Role};
//!
//! let segments = segment_transcript("User: hi\nChatGPT: hello", "chatgpt");
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].role, Role::User);
//! assert_eq!(segments[1].content, "hello");
//!
//! // Marker exports are detected by content, whatever the hint says
//! let segments = segment_transcript("Q1\n\nEdit\nA1\n\n\n\nQ2\n\nEdit\nA2", "other");
//! assert_eq!(segments.len(), 4);
//! ```
//!
//! ## Importing
//!
//! ```rust
//! use chatvault::prelude::*;
//!
//! let config = SegmenterConfig::new().with_provider(Provider::Claude);
//! let import = import_transcript("Human: Why is the sky blue?\nClaude: Rayleigh scattering.", Provider::Claude, &config)?;
//! assert_eq!(import.title, "Why is the sky blue?");
//! # Ok::<(), ChatvaultError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`segmenter`] - [`Segmenter`](segmenter::Segmenter) trait, both strategies,
//!   strategy selection and comparison
//! - [`patterns`] - prefix vocabularies, the marker line, export-format and
//!   user-query signals
//! - [`cleanup`] - idempotent text cleanup
//! - [`config`] - [`SegmenterConfig`](config::SegmenterConfig)
//! - [`core`] - consolidation, stats, previews, the import document and
//!   output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`cli`] - clap argument types (feature `cli`)
//! - [`error`] - [`ChatvaultError`], [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod cleanup;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod patterns;
pub mod provider;
pub mod segment;
pub mod segmenter;

pub use crate::core::import::{ChatImport, import_transcript};
pub use error::{ChatvaultError, Result};
pub use provider::Provider;
pub use segment::{Role, Segment};
pub use segmenter::{
    compare_strategies, segment_transcript, segment_with, select_strategy,
};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatvault::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Role, Segment};

    pub use crate::error::{ChatvaultError, Result};

    pub use crate::Provider;
    pub use crate::config::SegmenterConfig;

    pub use crate::segmenter::{
        MarkerSegmenter, PrefixParser, Segmenter, Strategy, StrategyComparison, StrategyKind,
        compare_strategies, create_segmenter, segment_transcript, segment_with, select_strategy,
    };

    pub use crate::core::{
        ChatImport, OutputConfig, SegmentStats, consolidate, generate_summary, generate_title,
        import_transcript,
    };

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{
        to_json, to_json_document, to_jsonl, write_json, write_json_document, write_jsonl,
    };

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
