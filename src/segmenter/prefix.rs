//! Speaker-prefix transcript parser.
//!
//! Recognises lines such as `User: ...`, `ChatGPT: ...`, `Human: ...` or
//! `Claude: ...` and attributes everything up to the next prefix line to that
//! speaker. Providers without a fixed vocabulary are auto-detected.
//!
//! Fallback chain when no prefixes apply:
//! 1. paragraph alternation (blank-line separated paragraphs, `user` first),
//! 2. the whole trimmed input as one `user` segment.

use tracing::{debug, trace};

use crate::Provider;
use crate::cleanup::normalize;
use crate::config::SegmenterConfig;
use crate::patterns::Vocabulary;
use crate::segment::{Role, Segment};
use crate::segmenter::{Segmenter, StrategyKind};

/// Parser for transcripts with speaker prefixes at line start.
///
/// # Example
///
/// ```rust
/// use chatvault::segmenter::{PrefixParser, Segmenter};
/// use chatvault::{Provider, Segment};
///
/// let parser = PrefixParser::new(Provider::Claude);
/// let segments = parser.segment("Human: ping\nClaude: pong");
/// assert_eq!(segments, vec![Segment::user("ping"), Segment::assistant("pong")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrefixParser {
    provider: Provider,
    keep_preamble: bool,
}

impl PrefixParser {
    /// Creates a parser for the given provider.
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            keep_preamble: false,
        }
    }

    /// Creates a parser from a segmenter configuration.
    pub fn with_config(config: &SegmenterConfig) -> Self {
        Self {
            provider: config.provider,
            keep_preamble: config.keep_preamble,
        }
    }

    /// Keeps lines before the first prefix as a leading `user` segment.
    #[must_use]
    pub fn with_keep_preamble(mut self, keep: bool) -> Self {
        self.keep_preamble = keep;
        self
    }

    /// Returns the provider whose vocabulary this parser uses.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Picks the vocabulary for the main pass.
    ///
    /// Providers with a fixed vocabulary always get it. Everything else uses
    /// the broad vocabulary, but only if both a user and an assistant prefix
    /// occur somewhere in the text.
    fn vocabulary(&self, lines: &[&str]) -> Option<Vocabulary> {
        if let Some(vocabulary) = Vocabulary::for_provider(self.provider) {
            return Some(vocabulary);
        }
        match Vocabulary::Broad.roles_present(lines.iter().copied()) {
            (true, true) => Some(Vocabulary::Broad),
            (user, assistant) => {
                debug!(user, assistant, "broad prefixes incomplete, skipping main pass");
                None
            }
        }
    }

    /// Line-by-line scan. Returns `None` when no line carried a prefix.
    fn scan(&self, lines: &[&str], vocabulary: Vocabulary) -> Option<Vec<Segment>> {
        let mut turns = TurnBuilder::new(self.keep_preamble);

        for (line_no, line) in lines.iter().enumerate() {
            match vocabulary.match_line(line) {
                Some(hit) => {
                    trace!(line_no, token = hit.token, role = %hit.role, "speaker prefix");
                    turns.open(hit.role, hit.rest);
                }
                None => turns.push(line),
            }
        }

        if turns.hits == 0 {
            return None;
        }
        Some(turns.finish())
    }

    fn parse_lines(&self, text: &str) -> Vec<Segment> {
        let lines: Vec<&str> = text.lines().collect();

        if let Some(vocabulary) = self.vocabulary(&lines) {
            match self.scan(&lines, vocabulary) {
                Some(segments) if !segments.is_empty() => return segments,
                _ => debug!(?vocabulary, "main pass found no turns, trying paragraphs"),
            }
        }

        let segments = split_paragraphs(&lines);
        if !segments.is_empty() {
            return segments;
        }

        whole_input(text)
    }
}

impl Segmenter for PrefixParser {
    fn name(&self) -> &'static str {
        "Prefix"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Prefix
    }

    fn segment(&self, text: &str) -> Vec<Segment> {
        self.parse_lines(text)
    }
}

/// State of the main pass: the open speaker and its pending lines.
struct TurnBuilder<'a> {
    open_role: Option<Role>,
    buffer: Vec<&'a str>,
    segments: Vec<Segment>,
    hits: usize,
}

impl<'a> TurnBuilder<'a> {
    /// A preamble is collected by opening a `user` turn before any prefix.
    fn new(keep_preamble: bool) -> Self {
        Self {
            open_role: keep_preamble.then_some(Role::User),
            buffer: Vec::new(),
            segments: Vec::new(),
            hits: 0,
        }
    }

    fn open(&mut self, role: Role, first_line: &'a str) {
        self.flush();
        self.hits += 1;
        self.open_role = Some(role);
        self.buffer.push(first_line);
    }

    fn push(&mut self, line: &'a str) {
        // Unattributed lines before the first prefix are dropped
        if self.open_role.is_some() {
            self.buffer.push(line);
        }
    }

    fn flush(&mut self) {
        let Some(role) = self.open_role else {
            return;
        };
        let content = normalize(&self.buffer.join("\n"));
        if !content.is_empty() {
            self.segments.push(Segment::new(role, content));
        }
        self.buffer.clear();
    }

    fn finish(mut self) -> Vec<Segment> {
        self.flush();
        self.segments
    }
}

/// Groups lines into blank-line separated paragraphs with alternating roles.
fn split_paragraphs(lines: &[&str]) -> Vec<Segment> {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n").trim().to_string());
    }

    debug!(paragraphs = paragraphs.len(), "paragraph alternation");

    let mut role = Role::User;
    paragraphs
        .into_iter()
        .map(|content| {
            let segment = Segment::new(role, content);
            role = role.other();
            segment
        })
        .collect()
}

fn whole_input(text: &str) -> Vec<Segment> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    debug!("whole-input fallback");
    vec![Segment::user(trimmed)]
}
