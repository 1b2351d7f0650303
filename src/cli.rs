//! Command-line interface definition using clap.
//!
//! - [`Args`] - CLI argument structure
//! - [`ProviderArg`], [`StrategyArg`], [`OutputFormat`] - `ValueEnum` mirrors of
//!   the library types, converted with `From`
//!
//! Only compiled with the `cli` feature.

use clap::{ArgAction, Parser, ValueEnum};

use crate::Provider;
use crate::segmenter::Strategy;

/// Default output path; the extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "chat_segments.json";

/// Split a pasted LLM chat transcript into user/assistant segments.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatvault")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatvault conversation.txt
    chatvault chat.txt -p claude -f csv -o chat.csv
    pbpaste | chatvault - --provider chatgpt --format jsonl
    chatvault export.txt --strategy marker --document --stats
    chatvault export.txt --compare")]
pub struct Args {
    /// Path to the transcript, or `-` for stdin
    pub input: String,

    /// Chat product the transcript was copied from
    #[arg(short, long, value_enum, default_value = "other")]
    pub provider: ProviderArg,

    /// Segmentation strategy
    #[arg(short, long, value_enum, default_value = "auto")]
    pub strategy: StrategyArg,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Keep text before the first speaker prefix as a user segment
    #[arg(long)]
    pub keep_preamble: bool,

    /// Include each segment's position in the output
    #[arg(long)]
    pub index: bool,

    /// Write the full import document (title, summary, provider) instead of
    /// a bare segment array (JSON only)
    #[arg(long)]
    pub document: bool,

    /// Include segment counts in the import document
    #[arg(long, requires = "document")]
    pub stats: bool,

    /// Run both strategies and print a side-by-side summary instead of
    /// writing output
    #[arg(long)]
    pub compare: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns `true` if the transcript should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input == "-"
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Provider choices on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ProviderArg {
    /// OpenAI ChatGPT
    #[value(name = "chatgpt", alias = "gpt", alias = "openai")]
    ChatGpt,

    /// Anthropic Claude
    #[value(alias = "anthropic")]
    Claude,

    /// xAI Grok
    Grok,

    /// Unknown, auto-detect prefixes
    Other,
}

impl From<ProviderArg> for Provider {
    fn from(arg: ProviderArg) -> Provider {
        match arg {
            ProviderArg::ChatGpt => Provider::ChatGpt,
            ProviderArg::Claude => Provider::Claude,
            ProviderArg::Grok => Provider::Grok,
            ProviderArg::Other => Provider::Other,
        }
    }
}

/// Strategy choices on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum StrategyArg {
    /// Marker segmenter if an `Edit` line is present, prefix parser otherwise
    Auto,

    /// Speaker prefixes (`User:`, `Claude:`, ...)
    Prefix,

    /// Standalone `Edit` marker lines
    #[value(alias = "edit")]
    Marker,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Strategy {
        match arg {
            StrategyArg::Auto => Strategy::Auto,
            StrategyArg::Prefix => Strategy::Prefix,
            StrategyArg::Marker => Strategy::Marker,
        }
    }
}

/// Output format choices on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    Csv,

    /// JSON array of segments
    #[default]
    Json,

    /// JSON Lines - one segment per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
