//! The segment type shared by every segmentation strategy.
//!
//! A [`Segment`] is one speaker-attributed span of transcript text. Both the
//! prefix parser and the marker segmenter return `Vec<Segment>`; position in
//! the vector is the chronological turn order.
//!
//! # Examples
//!
//! ```
//! use chatvault::{Role, Segment};
//!
//! let seg = Segment::user("What is Rust?");
//! assert_eq!(seg.role(), Role::User);
//! assert_eq!(seg.content(), "What is Rust?");
//! ```
//!
//! ## Serialization
//!
//! Segments serialize to the `{role, content}` shape the import layer
//! consumes. The marker-export label `ai` is accepted as an alias for
//! `assistant` when deserializing.
//!
//! ```
//! use chatvault::{Role, Segment};
//!
//! let json = serde_json::to_string(&Segment::assistant("Hello!"))?;
//! assert_eq!(json, r#"{"role":"assistant","content":"Hello!"}"#);
//!
//! let parsed: Segment = serde_json::from_str(r#"{"role":"ai","content":"Hi"}"#)?;
//! assert_eq!(parsed.role(), Role::Assistant);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// Who produced a segment.
///
/// There are exactly two speakers in a transcript; anything that can't be
/// attributed is assigned to [`Role::User`] by the fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human side of the conversation.
    User,

    /// The model side of the conversation.
    #[serde(alias = "ai")]
    Assistant,
}

impl Role {
    /// Returns the opposite role.
    ///
    /// ```
    /// use chatvault::Role;
    ///
    /// assert_eq!(Role::User.other(), Role::Assistant);
    /// assert_eq!(Role::Assistant.other(), Role::User);
    /// ```
    pub fn other(self) -> Self {
        match self {
            Role::User => Role::Assistant,
            Role::Assistant => Role::User,
        }
    }

    /// Returns the lowercase wire name (`user` / `assistant`).
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" | "human" => Ok(Role::User),
            "assistant" | "ai" => Ok(Role::Assistant),
            _ => Err(format!(
                "Unknown role: '{}'. Expected one of: user, assistant, ai",
                s
            )),
        }
    }
}

/// One speaker-attributed span of a transcript.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `role` | [`Role`] | Who said it |
/// | `content` | `String` | Trimmed text |
///
/// Segments produced by this crate never have empty or whitespace-only
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Speaker of this segment.
    pub role: Role,

    /// Text of this segment.
    ///
    /// Trimmed, with runs of three or more newlines collapsed to a single
    /// blank line.
    pub content: String,
}

impl Segment {
    /// Creates a segment with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a user segment.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant segment.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Returns the role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` if the role is [`Role::User`].
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Returns `true` if the content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
