//! Everything that happens around segmentation.
//!
//! - [`processor`] - consolidation of same-speaker runs and segment statistics
//! - [`preview`] - title and summary generation
//! - [`import`] - the import document handed to storage
//! - [`models`] - output configuration
//! - [`output`] - format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatvault::core::{
//!     OutputConfig, SegmentStats, consolidate, generate_summary, generate_title,
//!     write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod import;
pub mod models;
pub mod output;
pub mod preview;
pub mod processor;

pub use import::{ChatImport, import_transcript};
pub use models::OutputConfig;
pub use preview::{generate_summary, generate_title};
pub use processor::{SegmentStats, consolidate};

pub use crate::Segment;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{
    to_json, to_json_document, to_jsonl, write_json, write_json_document, write_jsonl,
};
