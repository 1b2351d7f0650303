//! Unified error types for chatvault.
//!
//! The segmenters themselves never fail: they degrade through a fixed fallback
//! chain and always return a (possibly empty) list of segments. Errors only
//! come from the edges of the crate:
//!
//! - reading an input file,
//! - writing CSV/JSON/JSONL output,
//! - strict parsing of user-supplied names (provider, output format),
//! - the import wrapper, which turns an empty segmentation into
//!   [`ChatvaultError::EmptyTranscript`].

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatvault operations.
///
/// # Example
///
/// ```rust
/// use chatvault::error::Result;
/// use chatvault::Segment;
///
/// fn my_function() -> Result<Vec<Segment>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatvaultError>;

/// The error type for all fallible chatvault operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatvaultError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input transcript doesn't exist or can't be read
    /// - The output file can't be created
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The requested format is unknown or not compiled in.
    ///
    /// This occurs when:
    /// - An output path has an unrecognized extension
    /// - An output format's feature is disabled
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A provider name did not match any known chat product.
    ///
    /// Only raised by strict parsing; [`Provider::from_hint`](crate::Provider::from_hint)
    /// maps unknown names to `Other` instead.
    #[error("Unknown provider '{input}'. Expected one of: {expected}")]
    UnknownProvider {
        /// The provider string that was supplied
        input: String,
        /// Comma-separated list of accepted names
        expected: String,
    },

    /// The transcript produced no segments.
    ///
    /// Raised for blank or whitespace-only input. Callers should surface this
    /// as "nothing to import" rather than as an internal failure.
    #[error("Nothing to import: the transcript is empty")]
    EmptyTranscript,

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when an input file or an output buffer is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatvaultError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatvaultError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatvaultError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatvaultError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an unknown provider error listing the accepted names.
    pub fn unknown_provider(input: impl Into<String>) -> Self {
        ChatvaultError::UnknownProvider {
            input: input.into(),
            expected: crate::Provider::all_names().join(", "),
        }
    }

    /// Creates a UTF-8 error with a description of where it happened.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatvaultError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatvaultError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatvaultError::InvalidFormat { .. })
    }

    /// Returns `true` if the transcript had nothing to import.
    pub fn is_empty_transcript(&self) -> bool {
        matches!(self, ChatvaultError::EmptyTranscript)
    }
}

// ============================================================================
// Tests
// ============================================================================
