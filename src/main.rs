//! # chatvault CLI
//!
//! Command-line interface for the chatvault library.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatvault::cli::{Args, DEFAULT_OUTPUT};
use chatvault::config::SegmenterConfig;
use chatvault::core::{ChatImport, OutputConfig, SegmentStats, import_transcript, write_json_document};
use chatvault::format::{OutputFormat, write_to_format};
use chatvault::segmenter::{Strategy, StrategyKind, compare_strategies};
use chatvault::{ChatvaultError, Provider, Segment};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so they never mix with progress output.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatvaultError> {
    let total_start = Instant::now();
    let provider: Provider = args.provider.into();
    let strategy: Strategy = args.strategy.into();
    let format: OutputFormat = args.format.into();
    let output_path = adjust_output_extension(&args.output, format);

    println!("🗂️  chatvault v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:    {}", input_label(args));
    println!("🤖 Provider: {}", provider);
    println!("🧭 Strategy: {}", strategy);
    if !args.compare {
        println!("💾 Output:   {}", output_path);
        println!("📄 Format:   {}", format);
    }
    println!();

    let raw = read_input(args)?;

    if args.compare {
        print_comparison(&raw, provider);
        return Ok(());
    }

    let config = SegmenterConfig::new()
        .with_provider(provider)
        .with_strategy(strategy)
        .with_keep_preamble(args.keep_preamble);

    println!("✂️  Segmenting...");
    let segment_start = Instant::now();
    let import = import_transcript(&raw, provider, &config)?;
    println!(
        "   Found {} segments via {} strategy ({:.2}s)",
        import.len(),
        import.stats.strategy,
        segment_start.elapsed().as_secs_f64()
    );

    let mut output_config = OutputConfig::new();
    if args.index {
        output_config = output_config.with_index();
    }
    if args.stats {
        output_config = output_config.with_stats();
    }

    println!("💾 Writing {}...", format);
    let write_start = Instant::now();
    if args.document {
        write_document(&import, &output_path, format, &output_config)?;
    } else {
        write_to_format(&import.messages, &output_path, format, &output_config)?;
    }
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    println!();
    println!("📊 Summary:");
    println!("   Title:     {}", import.title);
    println!(
        "   Segments:  {} ({} user, {} assistant)",
        import.stats.total, import.stats.user, import.stats.assistant
    );
    println!("   Preview:   {}", import.summary);

    println!();
    println!(
        "⚡ Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn input_label(args: &Args) -> &str {
    if args.reads_stdin() {
        "<stdin>"
    } else {
        &args.input
    }
}

fn read_input(args: &Args) -> Result<String, ChatvaultError> {
    if args.reads_stdin() {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        return Ok(raw);
    }
    let bytes = fs::read(&args.input)?;
    String::from_utf8(bytes).map_err(|e| ChatvaultError::utf8(format!("input file {}", args.input), e))
}

fn write_document(
    import: &ChatImport,
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatvaultError> {
    if format != OutputFormat::Json {
        return Err(ChatvaultError::invalid_format(
            "output",
            format!("--document writes JSON, got {}", format),
        ));
    }
    write_json_document(import, path, config)
}

fn print_comparison(raw: &str, provider: Provider) {
    let comparison = compare_strategies(raw, provider);

    println!("🔬 Comparing strategies (auto-selects {})", comparison.selected);
    for (kind, segments) in [
        (StrategyKind::Prefix, &comparison.prefix),
        (StrategyKind::Marker, &comparison.marker),
    ] {
        let stats = SegmentStats::collect(segments, kind);
        println!();
        println!(
            "   {:<7} {} segments ({} user, {} assistant)",
            kind, stats.total, stats.user, stats.assistant
        );
        for segment in segments.iter().take(3) {
            println!("     [{}] {}", segment.role, first_line(segment, 60));
        }
    }

    println!();
    if comparison.agree() {
        println!("🤝 Both strategies agree");
    } else {
        println!("⚖️  Strategies disagree");
    }
}

fn first_line(segment: &Segment, max_chars: usize) -> String {
    let line = segment.content.lines().next().unwrap_or_default();
    match line.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &line[..cut]),
        None => line.to_string(),
    }
}

/// Adjusts output file extension based on format if using the default output.
fn adjust_output_extension(output: &str, format: OutputFormat) -> String {
    if output != DEFAULT_OUTPUT {
        return output.to_string();
    }
    Path::new(DEFAULT_OUTPUT)
        .with_extension(format.extension())
        .to_string_lossy()
        .into_owned()
}
