//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of segments - requires `json-output` feature
//! - [`write_json_document`] / [`to_json_document`] - full import document
//!   (title, summary, provider, segments) - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one segment per line - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatvault::Result<()> {
//! use chatvault::core::output::{write_csv, write_jsonl, to_json};
//! use chatvault::core::models::OutputConfig;
//! use chatvault::Segment;
//!
//! let segments = vec![
//!     Segment::user("How do I exit vim?"),
//!     Segment::assistant("Press Esc, then type :q!"),
//! ];
//!
//! let config = OutputConfig::new().with_index();
//!
//! write_csv(&segments, "chat.csv", &config)?;
//! write_jsonl(&segments, "chat.jsonl", &config)?;
//! let json = to_json(&segments, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, to_json_document, write_json, write_json_document};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
