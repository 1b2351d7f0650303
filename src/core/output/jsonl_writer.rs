//! JSON Lines (JSONL) output writer.
//!
//! One segment per line, the shape most embedding and RAG pipelines ingest.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::json_writer::JsonSegment;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::segment::Segment;

/// Writes segments to a JSONL file.
///
/// # Format
/// ```text
/// {"role":"user","content":"Hello"}
/// {"role":"assistant","content":"Hi"}
/// ```
pub fn write_jsonl(segments: &[Segment], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(segments, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts segments to a JSONL string.
pub fn to_jsonl(segments: &[Segment], config: &OutputConfig) -> Result<String> {
    let mut output = String::new();
    for (index, segment) in segments.iter().enumerate() {
        output.push_str(&serde_json::to_string(&JsonSegment::new(index, segment, config))?);
        output.push('\n');
    }
    Ok(output)
}

fn write_lines<W: Write>(segments: &[Segment], writer: &mut W, config: &OutputConfig) -> Result<()> {
    for (index, segment) in segments.iter().enumerate() {
        serde_json::to_writer(&mut *writer, &JsonSegment::new(index, segment, config))?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
