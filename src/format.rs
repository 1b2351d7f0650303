//! Output format selection.
//!
//! Library-first: no CLI framework types here. The CLI has its own
//! `ValueEnum` mirror that converts into [`OutputFormat`].
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatvault::Result<()> {
//! use chatvault::format::{OutputFormat, to_format_string};
//! use chatvault::core::models::OutputConfig;
//! use chatvault::Segment;
//!
//! let segments = vec![Segment::user("Hi"), Segment::assistant("Hello!")];
//!
//! let format = OutputFormat::from_path("chat.jsonl")?;
//! let jsonl = to_format_string(&segments, format, &OutputConfig::new())?;
//! assert_eq!(jsonl.lines().count(), 2);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::error::{ChatvaultError, Result};
use crate::segment::Segment;

/// Output format for segmented transcripts.
///
/// - [`Csv`](OutputFormat::Csv) - `Role;Content` rows, compact for pasting into a prompt
/// - [`Json`](OutputFormat::Json) - array of `{role, content}` objects
/// - [`Jsonl`](OutputFormat::Jsonl) - one object per line, for RAG/ML pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    Csv,

    /// JSON array of segments
    #[default]
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Cargo feature that compiles the writer for this format.
    pub fn required_feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Detects format from a file path's extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatvault::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/chat.NDJSON").unwrap(), OutputFormat::Jsonl);
    /// assert!(OutputFormat::from_path("chat.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        ext.parse().map_err(|_| {
            ChatvaultError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: csv, json, jsonl",
                    ext
                ),
            )
        })
    }

    fn disabled(self) -> ChatvaultError {
        ChatvaultError::invalid_format(
            "output",
            format!(
                "Output format {} requires the '{}' feature to be enabled",
                self,
                self.required_feature()
            ),
        )
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes segments to a file in the given format.
///
/// # Errors
///
/// Returns an error if the format's feature is disabled or the file cannot
/// be written.
#[allow(unused_variables)]
pub fn write_to_format(
    segments: &[Segment],
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(segments, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(segments, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(segments, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.disabled()),
    }
}

/// Renders segments to a string in the given format.
#[allow(unused_variables)]
pub fn to_format_string(
    segments: &[Segment],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(segments, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(segments, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(segments, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.disabled()),
    }
}
