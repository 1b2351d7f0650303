//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::OutputConfig;
use crate::error::{ChatvaultError, Result};
use crate::segment::Segment;

/// Writes segments to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Role`, `Content`, preceded by `Index` when enabled
/// - Encoding: UTF-8
pub fn write_csv(segments: &[Segment], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(segments, file, config)
}

/// Converts segments to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(segments: &[Segment], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(segments, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|e| ChatvaultError::utf8("CSV output", e))
}

fn write_records<W: Write>(segments: &[Segment], sink: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;
    for (index, segment) in segments.iter().enumerate() {
        writer.write_record(build_record(index, segment, config))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(3);
    if config.include_index {
        header.push("Index");
    }
    header.push("Role");
    header.push("Content");
    header
}

fn build_record(index: usize, segment: &Segment, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::with_capacity(3);
    if config.include_index {
        record.push(index.to_string());
    }
    record.push(segment.role.as_str().to_string());
    record.push(segment.content.clone());
    record
}
