//! Tests for output writers (JSON, JSONL, CSV)

use chatvault::config::SegmenterConfig;
use chatvault::core::OutputConfig;
use chatvault::core::output::{
    write_csv, write_json, write_json_document, write_jsonl,
};
use chatvault::format::{OutputFormat, write_to_format};
use chatvault::{Provider, Segment, import_transcript};
use std::fs;
use tempfile::tempdir;

fn sample_segments() -> Vec<Segment> {
    vec![
        Segment::user("How do I split a string?"),
        Segment::assistant("Use `split`:\n\nlet parts: Vec<&str> = s.split(';').collect();"),
        Segment::user("Thanks; \"perfect\""),
    ]
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_write_json_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");

    write_json(&sample_segments(), path.to_str().unwrap(), &OutputConfig::new()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[0]["role"], "user");
    assert_eq!(parsed[1]["role"], "assistant");
    assert!(parsed[1]["content"].as_str().unwrap().contains("\n\nlet parts"));
    assert!(parsed[0].get("index").is_none());
}

#[test]
fn test_write_json_with_index() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");

    write_json(
        &sample_segments(),
        path.to_str().unwrap(),
        &OutputConfig::new().with_index(),
    )
    .unwrap();

    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let indices: Vec<u64> = parsed.iter().map(|v| v["index"].as_u64().unwrap()).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_write_json_reads_back_as_segments() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let segments = sample_segments();

    write_json(&segments, path.to_str().unwrap(), &OutputConfig::new()).unwrap();

    let back: Vec<Segment> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, segments);
}

#[test]
fn test_write_json_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.json");

    write_json(&[], path.to_str().unwrap(), &OutputConfig::new()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
}

// ============================================================================
// JSONL
// ============================================================================

#[test]
fn test_write_jsonl_one_object_per_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.jsonl");

    write_jsonl(&sample_segments(), path.to_str().unwrap(), &OutputConfig::new()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value["role"].is_string());
        assert!(value["content"].is_string());
    }
    // Embedded newlines stay escaped
    assert!(lines[1].contains("\\n\\nlet parts"));
}

#[test]
fn test_write_jsonl_with_index() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.jsonl");

    write_jsonl(
        &sample_segments(),
        path.to_str().unwrap(),
        &OutputConfig::all(),
    )
    .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let last: serde_json::Value = serde_json::from_str(content.lines().last().unwrap()).unwrap();
    assert_eq!(last["index"], 2);
}

// ============================================================================
// CSV
// ============================================================================

#[test]
fn test_write_csv_semicolon_delimited() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    write_csv(&sample_segments(), path.to_str().unwrap(), &OutputConfig::new()).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(&path)
        .unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, vec!["Role", "Content"]);

    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(&records[0][0], "user");
    assert_eq!(&records[1][0], "assistant");
    // Quoting round-trips delimiters, quotes and newlines
    assert_eq!(&records[2][1], "Thanks; \"perfect\"");
    assert!(records[1][1].contains("\n\n"));
}

#[test]
fn test_write_csv_with_index() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    write_csv(
        &sample_segments(),
        path.to_str().unwrap(),
        &OutputConfig::new().with_index(),
    )
    .unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(&path)
        .unwrap();
    assert_eq!(reader.headers().unwrap().get(0), Some("Index"));
    let first = reader.records().next().unwrap().unwrap();
    assert_eq!(&first[0], "0");
    assert_eq!(&first[1], "user");
}

#[test]
fn test_write_csv_unicode() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("unicode.csv");
    let segments = vec![Segment::user("Привет 👋"), Segment::assistant("こんにちは")];

    write_csv(&segments, path.to_str().unwrap(), &OutputConfig::new()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Привет 👋"));
    assert!(content.contains("こんにちは"));
}

// ============================================================================
// Dispatch and documents
// ============================================================================

#[test]
fn test_write_to_format_all_formats() {
    let dir = tempdir().unwrap();
    for format in OutputFormat::all() {
        let path = dir.path().join(format!("out.{}", format.extension()));
        write_to_format(
            &sample_segments(),
            path.to_str().unwrap(),
            *format,
            &OutputConfig::new(),
        )
        .unwrap();
        assert!(path.exists(), "{format}");
        assert_eq!(OutputFormat::from_path(&path).unwrap(), *format);
    }
}

#[test]
fn test_write_to_missing_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.json");

    let err = write_json(&sample_segments(), path.to_str().unwrap(), &OutputConfig::new())
        .unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_write_json_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.json");
    let import = import_transcript(
        "User: What is a monad?\nChatGPT: A monoid in the category of endofunctors.",
        Provider::ChatGpt,
        &SegmenterConfig::for_hint("chatgpt"),
    )
    .unwrap();

    write_json_document(&import, path.to_str().unwrap(), &OutputConfig::all()).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["title"], "What is a monad?");
    assert_eq!(value["provider"], "chatgpt");
    assert_eq!(value["messages"][1]["index"], 1);
    assert_eq!(value["stats"]["total"], 2);
    assert_eq!(value["stats"]["assistant"], 1);
}

#[test]
fn test_write_json_document_without_stats() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.json");
    let import = import_transcript(
        "just a note",
        Provider::Other,
        &SegmenterConfig::new(),
    )
    .unwrap();

    write_json_document(&import, path.to_str().unwrap(), &OutputConfig::new()).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(value.get("stats").is_none());
    assert_eq!(value["summary"], "just a note");
}
