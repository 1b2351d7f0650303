//! Recognition tables for every structural cue the segmenters look for.
//!
//! Speaker prefixes, the turn marker, export-format signals and user-query
//! signals all live here as data. The segmenters only ask questions of these
//! tables ("does this line open a turn?", "where does the next user query
//! start?"), so adding a vocabulary or a signal never touches control flow.
//!
//! Every regex is compiled once and shared through a `OnceLock`.

use std::sync::OnceLock;

use regex::Regex;

use crate::Provider;
use crate::segment::Role;

// ============================================================================
// Speaker prefixes
// ============================================================================

/// A set of speaker-prefix tokens, one list per role.
///
/// A line opens a turn when, after optional leading whitespace, it starts with
/// one of the tokens followed by `:` (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    /// `User:` / `You:` against `ChatGPT:` / `Assistant:` / `AI:`
    ChatGpt,
    /// `Human:` / `You:` against `Claude:` / `Assistant:` / `AI:`
    Claude,
    /// Union used for auto-detection on unknown providers.
    Broad,
}

impl Vocabulary {
    /// Tokens that open a user turn.
    pub fn user_prefixes(self) -> &'static [&'static str] {
        match self {
            Vocabulary::ChatGpt => &["User", "You"],
            Vocabulary::Claude => &["Human", "You"],
            Vocabulary::Broad => &["User", "You", "Human", "I"],
        }
    }

    /// Tokens that open an assistant turn.
    pub fn assistant_prefixes(self) -> &'static [&'static str] {
        match self {
            Vocabulary::ChatGpt => &["ChatGPT", "Assistant", "AI"],
            Vocabulary::Claude => &["Claude", "Assistant", "AI"],
            Vocabulary::Broad => &["Assistant", "AI", "ChatGPT", "Claude", "Grok"],
        }
    }

    /// Tokens for the given role.
    pub fn prefixes(self, role: Role) -> &'static [&'static str] {
        match role {
            Role::User => self.user_prefixes(),
            Role::Assistant => self.assistant_prefixes(),
        }
    }

    /// Fixed vocabulary for a provider, or `None` when it must be detected.
    pub fn for_provider(provider: Provider) -> Option<Vocabulary> {
        match provider {
            Provider::ChatGpt => Some(Vocabulary::ChatGpt),
            Provider::Claude => Some(Vocabulary::Claude),
            _ => None,
        }
    }

    /// Returns all vocabularies.
    pub fn all() -> &'static [Vocabulary] {
        &[Vocabulary::ChatGpt, Vocabulary::Claude, Vocabulary::Broad]
    }

    /// Builds the regex source for this vocabulary.
    ///
    /// Two named groups, `user` and `assistant`, record which side fired.
    pub fn pattern(self) -> String {
        let alternation = |tokens: &[&str]| {
            tokens
                .iter()
                .map(|t| regex::escape(t))
                .collect::<Vec<_>>()
                .join("|")
        };
        format!(
            r"(?i)^[ \t]*(?:(?P<user>{})|(?P<assistant>{})):[ \t]*",
            alternation(self.user_prefixes()),
            alternation(self.assistant_prefixes())
        )
    }

    fn regex(self) -> &'static Regex {
        static CHATGPT: OnceLock<Regex> = OnceLock::new();
        static CLAUDE: OnceLock<Regex> = OnceLock::new();
        static BROAD: OnceLock<Regex> = OnceLock::new();

        let cell = match self {
            Vocabulary::ChatGpt => &CHATGPT,
            Vocabulary::Claude => &CLAUDE,
            Vocabulary::Broad => &BROAD,
        };
        cell.get_or_init(|| {
            Regex::new(&self.pattern()).expect("prefix vocabulary pattern is valid")
        })
    }

    /// Matches a speaker prefix at the start of `line`.
    ///
    /// ```
    /// use chatvault::patterns::Vocabulary;
    /// use chatvault::Role;
    ///
    /// let hit = Vocabulary::ChatGpt.match_line("  CHATGPT:  Sure thing").unwrap();
    /// assert_eq!(hit.role, Role::Assistant);
    /// assert_eq!(hit.token, "CHATGPT");
    /// assert_eq!(hit.rest, "Sure thing");
    ///
    /// assert!(Vocabulary::ChatGpt.match_line("I asked the User: why?").is_none());
    /// ```
    pub fn match_line(self, line: &str) -> Option<PrefixHit<'_>> {
        let caps = self.regex().captures(line)?;
        let whole = caps.get(0)?;
        let (role, token) = match (caps.name("user"), caps.name("assistant")) {
            (Some(m), _) => (Role::User, m.as_str()),
            (None, Some(m)) => (Role::Assistant, m.as_str()),
            (None, None) => return None,
        };
        Some(PrefixHit {
            role,
            token,
            rest: &line[whole.end()..],
        })
    }

    /// Returns which roles have at least one prefixed line in `lines`.
    ///
    /// Single pass; stops early once both sides have been seen.
    pub fn roles_present<'a, I>(self, lines: I) -> (bool, bool)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut user = false;
        let mut assistant = false;
        for line in lines {
            match self.match_line(line).map(|hit| hit.role) {
                Some(Role::User) => user = true,
                Some(Role::Assistant) => assistant = true,
                None => {}
            }
            if user && assistant {
                break;
            }
        }
        (user, assistant)
    }
}

/// A recognised speaker prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixHit<'a> {
    /// Role the prefix opens.
    pub role: Role,
    /// The token as written in the source (original casing).
    pub token: &'a str,
    /// Remainder of the line after `token:` and any following whitespace.
    pub rest: &'a str,
}

// ============================================================================
// Turn marker
// ============================================================================

/// The standalone line that introduces an AI turn in marker exports.
pub const MARKER_TOKEN: &str = "Edit";

/// Regex matching a line that is exactly the marker (horizontal whitespace
/// allowed on either side).
pub fn marker_line_regex() -> &'static Regex {
    static MARKER_LINE: OnceLock<Regex> = OnceLock::new();
    MARKER_LINE.get_or_init(|| {
        Regex::new(&format!(r"(?m)^[ \t]*{}[ \t]*\r?$", regex::escape(MARKER_TOKEN)))
            .expect("marker line pattern is valid")
    })
}

/// Returns `true` if `text` contains at least one marker line.
///
/// ```
/// use chatvault::patterns::has_marker_line;
///
/// assert!(has_marker_line("Question\n\nEdit\nAnswer"));
/// assert!(!has_marker_line("Please Edit this paragraph"));
/// ```
pub fn has_marker_line(text: &str) -> bool {
    marker_line_regex().is_match(text)
}

/// Finds the first run of three or more newlines in `chunk`.
///
/// In simple marker exports this gap separates an AI answer from the next
/// user query. Returns the byte range of the run.
///
/// ```
/// use chatvault::patterns::find_turn_gap;
///
/// assert_eq!(find_turn_gap("answer\n\n\nnext"), Some(6..9));
/// assert_eq!(find_turn_gap("answer\n\nsame turn"), None);
/// ```
pub fn find_turn_gap(chunk: &str) -> Option<std::ops::Range<usize>> {
    static TURN_GAP: OnceLock<Regex> = OnceLock::new();
    TURN_GAP
        .get_or_init(|| Regex::new(r"\n{3,}").expect("turn gap pattern is valid"))
        .find(chunk)
        .map(|m| m.range())
}

// ============================================================================
// Export sub-formats
// ============================================================================

/// Sub-format of a marker export, chosen once per document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Plain marker export: AI and next user turn separated by a wide gap.
    Simple,
    /// Code-hosting-flavored export with attachment headers and retry noise.
    Noisy,
}

impl ExportFormat {
    /// Substrings whose presence anywhere selects [`ExportFormat::Noisy`].
    pub const NOISY_SIGNALS: &'static [&'static str] =
        &["GITHUB", "Interactive artifact", "Architecture"];

    /// Detects the sub-format from the whole document.
    pub fn detect(text: &str) -> Self {
        if Self::NOISY_SIGNALS.iter().any(|s| text.contains(s)) {
            ExportFormat::Noisy
        } else {
            ExportFormat::Simple
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Simple => write!(f, "simple"),
            ExportFormat::Noisy => write!(f, "noisy"),
        }
    }
}

// ============================================================================
// User-query signals (noisy exports)
// ============================================================================

/// Cues that a new user query begins inside an AI chunk of a noisy export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserQuerySignal {
    /// A line that is just `Retry`, followed by more text.
    Retry,
    /// A line starting with `An error occurred`.
    ErrorNotice,
    /// A line that is just a repository path, e.g. `owner/repo-name`.
    ///
    /// The repo name has no `.`, so file paths like `src/main.rs` don't count.
    RepoPath,
    /// A line starting with `so based on this`.
    SoBasedOnThis,
    /// `Can you fix this error` at the start of a line.
    FixThisError,
}

impl UserQuerySignal {
    /// Returns the regex source for this signal.
    pub fn pattern(self) -> &'static str {
        match self {
            UserQuerySignal::Retry => r"(?m)^[ \t]*Retry[ \t]*\n",
            UserQuerySignal::ErrorNotice => r"(?im)^An error occurred",
            UserQuerySignal::RepoPath => r"(?m)^[A-Za-z0-9][\w-]*/[\w-]+[ \t]*\n",
            UserQuerySignal::SoBasedOnThis => r"(?im)^so based on this",
            UserQuerySignal::FixThisError => r"(?i)\n\s*Can you fix this error",
        }
    }

    /// Returns all signals in priority order.
    pub fn all() -> &'static [UserQuerySignal] {
        &[
            UserQuerySignal::Retry,
            UserQuerySignal::ErrorNotice,
            UserQuerySignal::RepoPath,
            UserQuerySignal::SoBasedOnThis,
            UserQuerySignal::FixThisError,
        ]
    }

    fn regex(self) -> &'static Regex {
        static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
        let all = COMPILED.get_or_init(|| {
            UserQuerySignal::all()
                .iter()
                .map(|s| Regex::new(s.pattern()).expect("user query pattern is valid"))
                .collect()
        });
        let idx = UserQuerySignal::all()
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default();
        &all[idx]
    }

    /// Byte offset of the first match of this signal in `chunk`.
    pub fn find(self, chunk: &str) -> Option<usize> {
        self.regex().find(chunk).map(|m| m.start())
    }

    /// Earliest match among all signals; ties go to the earlier signal.
    ///
    /// ```
    /// use chatvault::patterns::UserQuerySignal;
    ///
    /// let chunk = "Here is the fix.\nRetry\nAn error occurred again";
    /// let (signal, at) = UserQuerySignal::earliest(chunk).unwrap();
    /// assert_eq!(signal, UserQuerySignal::Retry);
    /// assert_eq!(&chunk[at..at + 5], "Retry");
    /// ```
    pub fn earliest(chunk: &str) -> Option<(UserQuerySignal, usize)> {
        let mut best: Option<(UserQuerySignal, usize)> = None;
        for signal in Self::all() {
            if let Some(at) = signal.find(chunk) {
                if best.is_none_or(|(_, b)| at < b) {
                    best = Some((*signal, at));
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_patterns_compile() {
        for vocab in Vocabulary::all() {
            assert!(Regex::new(&vocab.pattern()).is_ok(), "{vocab:?}");
        }
    }

    #[test]
    fn test_chatgpt_vocabulary() {
        let v = Vocabulary::ChatGpt;
        assert_eq!(v.match_line("User: hi").unwrap().role, Role::User);
        assert_eq!(v.match_line("You: hi").unwrap().role, Role::User);
        assert_eq!(v.match_line("ChatGPT: yo").unwrap().role, Role::Assistant);
        assert_eq!(v.match_line("AI: yo").unwrap().role, Role::Assistant);
        assert!(v.match_line("Human: hi").is_none());
        assert!(v.match_line("Claude: hi").is_none());
    }

    #[test]
    fn test_claude_vocabulary() {
        let v = Vocabulary::Claude;
        assert_eq!(v.match_line("Human: hi").unwrap().role, Role::User);
        assert_eq!(v.match_line("Claude: yo").unwrap().role, Role::Assistant);
        assert!(v.match_line("User: hi").is_none());
        assert!(v.match_line("ChatGPT: hi").is_none());
    }

    #[test]
    fn test_prefix_case_insensitive() {
        for line in ["USER: x", "user: x", "User: x", "uSeR: x"] {
            let hit = Vocabulary::ChatGpt.match_line(line).unwrap();
            assert_eq!(hit.role, Role::User);
            assert_eq!(hit.rest, "x");
        }
    }

    #[test]
    fn test_prefix_requires_colon_right_after_token() {
        assert!(Vocabulary::ChatGpt.match_line("Youth: matters").is_none());
        assert!(Vocabulary::ChatGpt.match_line("User : spaced").is_none());
        assert!(Vocabulary::Broad.match_line("AIR: quality").is_none());
    }

    #[test]
    fn test_prefix_leading_whitespace_and_empty_rest() {
        let hit = Vocabulary::Broad.match_line("\t  Grok:").unwrap();
        assert_eq!(hit.role, Role::Assistant);
        assert_eq!(hit.token, "Grok");
        assert_eq!(hit.rest, "");
    }

    #[test]
    fn test_broad_single_letter_user() {
        let hit = Vocabulary::Broad.match_line("I: wonder").unwrap();
        assert_eq!(hit.role, Role::User);
        assert_eq!(hit.rest, "wonder");
    }

    #[test]
    fn test_roles_present() {
        let lines = ["intro", "User: a", "more"];
        assert_eq!(Vocabulary::Broad.roles_present(lines), (true, false));

        let lines = ["Human: a", "Grok: b"];
        assert_eq!(Vocabulary::Broad.roles_present(lines), (true, true));
    }

    #[test]
    fn test_marker_line_exact() {
        assert!(has_marker_line("Edit"));
        assert!(has_marker_line("a\n  Edit  \nb"));
        assert!(has_marker_line("a\r\nEdit\r\nb"));
        assert!(!has_marker_line("Edit the file"));
        assert!(!has_marker_line("edit"));
        assert!(!has_marker_line("Edited"));
    }

    #[test]
    fn test_turn_gap() {
        assert_eq!(find_turn_gap("a\n\n\n\n\nb"), Some(1..6));
        assert_eq!(find_turn_gap("a\n\nb\n\n\nc"), Some(4..7));
        assert!(find_turn_gap("a\nb").is_none());
    }

    #[test]
    fn test_export_format_detect() {
        assert_eq!(ExportFormat::detect("plain chat"), ExportFormat::Simple);
        assert_eq!(ExportFormat::detect("GITHUB\nrepo"), ExportFormat::Noisy);
        assert_eq!(
            ExportFormat::detect("an Interactive artifact here"),
            ExportFormat::Noisy
        );
        assert_eq!(ExportFormat::detect("System Architecture"), ExportFormat::Noisy);
        assert_eq!(ExportFormat::detect("github lowercase"), ExportFormat::Simple);
    }

    #[test]
    fn test_user_query_signal_patterns_compile() {
        for signal in UserQuerySignal::all() {
            assert!(Regex::new(signal.pattern()).is_ok(), "{signal:?}");
        }
    }

    #[test]
    fn test_user_query_signals() {
        assert_eq!(UserQuerySignal::Retry.find("ok\nRetry\nnext"), Some(3));
        assert!(UserQuerySignal::Retry.find("Retry later").is_none());
        assert!(UserQuerySignal::Retry.find("answer\nRetry").is_none());
        assert_eq!(
            UserQuerySignal::ErrorNotice.find("x\nan error occurred: boom"),
            Some(2)
        );
        assert_eq!(UserQuerySignal::RepoPath.find("done\nmegh42/chat-vault\n"), Some(5));
        assert!(UserQuerySignal::RepoPath.find("use and/or here").is_none());
        assert!(UserQuerySignal::RepoPath.find("open\nsrc/main.rs\nthen").is_none());
        assert!(UserQuerySignal::RepoPath.find("done\nacme/widgets").is_none());
        assert_eq!(
            UserQuerySignal::SoBasedOnThis.find("x\nSo based on this, what now?"),
            Some(2)
        );
        assert_eq!(
            UserQuerySignal::FixThisError.find("answer\n  can you fix this error?"),
            Some(6)
        );
    }

    #[test]
    fn test_earliest_signal_wins_by_position() {
        let chunk = "AI text\nso based on this\nmore\nRetry\n";
        let (signal, at) = UserQuerySignal::earliest(chunk).unwrap();
        assert_eq!(signal, UserQuerySignal::SoBasedOnThis);
        assert_eq!(at, 8);
    }

    #[test]
    fn test_earliest_none() {
        assert!(UserQuerySignal::earliest("nothing to see").is_none());
    }
}
