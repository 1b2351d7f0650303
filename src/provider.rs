//! Chat products a transcript can be exported from.
//!
//! The provider hint selects the speaker-prefix vocabulary used by the prefix
//! parser. Anything the caller doesn't recognise maps to [`Provider::Other`],
//! which makes the parser auto-detect the prefix family instead.
//!
//! # Example
//!
//! ```rust
//! use chatvault::Provider;
//! use std::str::FromStr;
//!
//! assert_eq!(Provider::from_str("chatgpt").unwrap(), Provider::ChatGpt);
//! assert_eq!(Provider::from_str("gpt").unwrap(), Provider::ChatGpt);
//!
//! // Lenient: unknown hints fall back to auto-detection
//! assert_eq!(Provider::from_hint("gemini"), Provider::Other);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChatvaultError;

/// Supported chat providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Provider {
    /// OpenAI ChatGPT (`User:` / `ChatGPT:` prefixes)
    #[serde(alias = "gpt", alias = "openai")]
    ChatGpt,

    /// Anthropic Claude (`Human:` / `Claude:` prefixes, `Edit` markers)
    #[serde(alias = "anthropic")]
    Claude,

    /// xAI Grok (no fixed vocabulary, auto-detected)
    Grok,

    /// Anything else (auto-detected)
    #[default]
    Other,
}

impl Provider {
    /// Returns all provider names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &[
            "chatgpt", "gpt", "openai", "claude", "anthropic", "grok", "other",
        ]
    }

    /// Returns all providers.
    pub fn all() -> &'static [Provider] {
        &[
            Provider::ChatGpt,
            Provider::Claude,
            Provider::Grok,
            Provider::Other,
        ]
    }

    /// Returns the identifier stored alongside imported chats.
    pub fn id(&self) -> &'static str {
        match self {
            Provider::ChatGpt => "chatgpt",
            Provider::Claude => "claude",
            Provider::Grok => "grok",
            Provider::Other => "other",
        }
    }

    /// Human-readable product name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::ChatGpt => "ChatGPT",
            Provider::Claude => "Claude",
            Provider::Grok => "Grok",
            Provider::Other => "Other",
        }
    }

    /// Maps a caller-supplied hint to a provider, never failing.
    ///
    /// Unknown or empty hints become [`Provider::Other`].
    pub fn from_hint(hint: &str) -> Self {
        hint.trim().parse().unwrap_or(Provider::Other)
    }

    /// Returns `true` if this provider has a fixed prefix vocabulary.
    pub fn has_vocabulary(&self) -> bool {
        matches!(self, Provider::ChatGpt | Provider::Claude)
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Provider {
    type Err = ChatvaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chatgpt" | "gpt" | "openai" => Ok(Provider::ChatGpt),
            "claude" | "anthropic" => Ok(Provider::Claude),
            "grok" => Ok(Provider::Grok),
            "other" => Ok(Provider::Other),
            _ => Err(ChatvaultError::unknown_provider(s)),
        }
    }
}
