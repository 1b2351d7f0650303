//! JSON output writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::Provider;
use crate::core::import::ChatImport;
use crate::core::models::OutputConfig;
use crate::core::processor::SegmentStats;
use crate::error::Result;
use crate::segment::{Role, Segment};

/// Segment as written to JSON and JSONL.
#[derive(Serialize)]
pub(super) struct JsonSegment<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    role: Role,
    content: &'a str,
}

impl<'a> JsonSegment<'a> {
    pub(super) fn new(index: usize, segment: &'a Segment, config: &OutputConfig) -> Self {
        Self {
            index: config.include_index.then_some(index),
            role: segment.role,
            content: &segment.content,
        }
    }
}

fn json_segments<'a>(segments: &'a [Segment], config: &OutputConfig) -> Vec<JsonSegment<'a>> {
    segments
        .iter()
        .enumerate()
        .map(|(i, s)| JsonSegment::new(i, s, config))
        .collect()
}

/// Writes segments to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"role": "user", "content": "Hello"},
///   {"role": "assistant", "content": "Hi"}
/// ]
/// ```
pub fn write_json(segments: &[Segment], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(segments, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts segments to a pretty-printed JSON array.
pub fn to_json(segments: &[Segment], config: &OutputConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json_segments(segments, config))?)
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    title: &'a str,
    summary: &'a str,
    provider: Provider,
    messages: Vec<JsonSegment<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<SegmentStats>,
}

/// Converts an import document to pretty-printed JSON.
///
/// # Format
/// ```json
/// {
///   "title": "...",
///   "summary": "...",
///   "provider": "chatgpt",
///   "messages": [{"role": "user", "content": "..."}],
///   "stats": {"total": 2, "user": 1, "assistant": 1, "strategy": "prefix"}
/// }
/// ```
///
/// `stats` is only present with [`OutputConfig::include_stats`].
pub fn to_json_document(import: &ChatImport, config: &OutputConfig) -> Result<String> {
    let document = JsonDocument {
        title: &import.title,
        summary: &import.summary,
        provider: import.provider,
        messages: json_segments(&import.messages, config),
        stats: config.include_stats.then_some(import.stats),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Writes an import document to a JSON file.
pub fn write_json_document(
    import: &ChatImport,
    output_path: &str,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json_document(import, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
