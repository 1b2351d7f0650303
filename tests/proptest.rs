//! Property-based tests for chatvault.
//!
//! Inputs are assembled from small pools of fragments so every case stays
//! fast and meaningful.

use std::collections::HashSet;

use proptest::prelude::*;

use chatvault::cleanup::{clean_text, normalize};
use chatvault::core::consolidate;
use chatvault::segmenter::{MarkerSegmenter, Segmenter};
use chatvault::{Role, Segment, segment_transcript};

/// Words that never form a prefix, a marker line or a noisy signal.
fn arb_word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "hello", "rust", "borrow", "checker", "привет", "世界", "🦀", "why?", "ok.", "42x",
        "edit", "user", "retry",
    ])
}

fn arb_line() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_word(), 1..6).prop_map(|words| words.join(" "))
}

/// One or more lines, no blank line inside.
fn arb_paragraph() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_line(), 1..4).prop_map(|lines| lines.join("\n"))
}

fn arb_blank_separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["\n\n", "\n\n\n", "\n \n", "\n\t\n\n"])
}

/// Chunks for marker documents, including the noise the segmenter strips.
fn arb_marker_chunk() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "A plain answer".to_string(),
        "Answer\n\n\n\nNext question".to_string(),
        "Answer then\nRetry\nfollow-up".to_string(),
        "acme/repo".to_string(),
        "An error occurred".to_string(),
        "Fix applied\n  Can you fix this error as well?".to_string(),
        "Body\nClaude".to_string(),
        "Numbered\n7".to_string(),
        String::new(),
        "   ".to_string(),
        "GITHUB".to_string(),
    ])
}

fn arb_segment() -> impl Strategy<Value = Segment> {
    (
        prop::sample::select(vec![Role::User, Role::Assistant]),
        prop::sample::select(vec!["q", "answer", "", "  ", "multi\nline", "Ünïcödé"]),
    )
        .prop_map(|(role, content)| Segment::new(role, content))
}

fn arb_prefix_case() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop::sample::select(vec![
        ("User", "ChatGPT"),
        ("user", "chatgpt"),
        ("USER", "CHATGPT"),
        ("You", "Assistant"),
        ("yOu", "aI"),
    ])
}

fn arb_vocabulary() -> impl Strategy<Value = (&'static str, &'static str, &'static str)> {
    prop::sample::select(vec![
        ("chatgpt", "User", "ChatGPT"),
        ("claude", "Human", "Claude"),
        ("grok", "You", "Grok"),
        ("other", "I", "Assistant"),
    ])
}

/// First input word that is missing from every segment, if any.
fn missing_word(parts: &[String], segments: &[Segment]) -> Option<String> {
    let output: HashSet<&str> = segments
        .iter()
        .flat_map(|s| s.content.split_whitespace())
        .collect();
    parts
        .iter()
        .flat_map(|p| p.split_whitespace())
        .find(|word| !output.contains(word))
        .map(String::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Text with no structure comes back as one trimmed user segment.
    #[test]
    fn single_paragraph_is_whole_input(
        paragraph in arb_paragraph(),
        padding in prop::sample::select(vec!["", " ", "\n", "  \n\t"]),
        hint in prop::sample::select(vec!["chatgpt", "claude", "grok", "other"]),
    ) {
        let text = format!("{padding}{paragraph}{padding}");
        let segments = segment_transcript(&text, hint);
        prop_assert_eq!(segments, vec![Segment::user(text.trim())]);
    }

    /// N blank-separated paragraphs give N segments, alternating from user.
    #[test]
    fn paragraphs_alternate(
        paragraphs in prop::collection::vec(arb_paragraph(), 1..8),
        separator in arb_blank_separator(),
    ) {
        let text = paragraphs.join(separator);
        let segments = segment_transcript(&text, "other");

        prop_assert_eq!(segments.len(), paragraphs.len());
        for (i, segment) in segments.iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            prop_assert_eq!(segment.role, expected);
            prop_assert_eq!(&segment.content, paragraphs[i].trim());
        }
    }

    /// Prefix tokens match regardless of case.
    #[test]
    fn prefixes_case_insensitive(
        (user, assistant) in arb_prefix_case(),
        question in arb_line(),
        answer in arb_line(),
    ) {
        let text = format!("{user}: {question}\n{assistant}: {answer}");
        let segments = segment_transcript(&text, "chatgpt");
        prop_assert_eq!(
            segments,
            vec![Segment::user(question.trim()), Segment::assistant(answer.trim())]
        );
    }

    /// The marker segmenter never yields two neighbours with the same role.
    #[test]
    fn marker_roles_alternate(
        opening in arb_paragraph(),
        chunks in prop::collection::vec(arb_marker_chunk(), 0..8),
    ) {
        let mut text = opening;
        for chunk in &chunks {
            text.push_str("\nEdit\n");
            text.push_str(chunk);
        }
        let segments = MarkerSegmenter::new().segment(&text);
        for pair in segments.windows(2) {
            prop_assert_ne!(pair[0].role, pair[1].role);
        }
    }

    /// No strategy ever emits an empty or untrimmed segment.
    #[test]
    fn no_empty_segments(
        parts in prop::collection::vec(
            prop::sample::select(vec![
                "User: hi", "ChatGPT: hello", "Edit", "", "  ", "Human:", "Claude: ok",
                "GITHUB", "Retry", "text", "\n\n\n",
            ]),
            0..12,
        ),
        hint in prop::sample::select(vec!["chatgpt", "claude", "other"]),
    ) {
        let text = parts.join("\n");
        for segment in segment_transcript(&text, hint) {
            prop_assert!(!segment.is_empty());
            prop_assert_eq!(segment.content.trim(), segment.content.as_str());
        }
    }

    /// Non-blank input always yields at least one segment.
    #[test]
    fn non_blank_never_empty(paragraph in arb_paragraph(), hint in "[a-z]{0,8}") {
        prop_assert!(!segment_transcript(&paragraph, &hint).is_empty());
    }

    /// Consolidation drops empties and leaves no adjacent same roles.
    #[test]
    fn consolidate_invariants(segments in prop::collection::vec(arb_segment(), 0..20)) {
        let merged = consolidate(segments.clone());
        for segment in &merged {
            prop_assert!(!segment.content.is_empty());
        }
        for pair in merged.windows(2) {
            prop_assert_ne!(pair[0].role, pair[1].role);
        }
        prop_assert!(merged.len() <= segments.len());
    }

    /// Consolidating twice changes nothing.
    #[test]
    fn consolidate_idempotent(segments in prop::collection::vec(arb_segment(), 0..20)) {
        let once = consolidate(segments);
        prop_assert_eq!(consolidate(once.clone()), once);
    }

    #[test]
    fn normalize_idempotent(
        parts in prop::collection::vec(
            prop::sample::select(vec!["a", " ", "\n", "\n\n\n", "\t", "text"]),
            0..15,
        ),
    ) {
        let text = parts.concat();
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(!once.contains("\n\n\n"));
    }

    /// Plain prose has nothing for the artifact stripping to remove.
    #[test]
    fn clean_text_keeps_prose(paragraph in arb_paragraph()) {
        prop_assert_eq!(clean_text(&paragraph), normalize(&paragraph));
    }

    /// Every word of a prefixed transcript survives segmentation.
    #[test]
    fn prefix_transcript_keeps_every_word(
        (hint, user, assistant) in arb_vocabulary(),
        turns in prop::collection::vec(arb_paragraph(), 1..8),
    ) {
        let text = turns
            .iter()
            .enumerate()
            .map(|(i, turn)| {
                let token = if i % 2 == 0 { user } else { assistant };
                format!("{token}: {turn}")
            })
            .collect::<Vec<_>>()
            .join("\n");
        let segments = segment_transcript(&text, hint);
        prop_assert_eq!(missing_word(&turns, &segments), None);
    }

    /// Every word of a marker export survives segmentation.
    #[test]
    fn marker_transcript_keeps_every_word(
        opening in arb_paragraph(),
        rounds in prop::collection::vec((arb_paragraph(), arb_paragraph()), 1..6),
    ) {
        let mut text = opening.clone();
        let mut parts = vec![opening];
        for (answer, question) in rounds {
            text.push_str(&format!("\n\nEdit\n{answer}\n\n\n\n{question}"));
            parts.push(answer);
            parts.push(question);
        }
        let segments = segment_transcript(&text, "other");
        prop_assert_eq!(missing_word(&parts, &segments), None);
    }

    /// Every word of a plain multi-paragraph text survives segmentation.
    #[test]
    fn paragraphs_keep_every_word(
        paragraphs in prop::collection::vec(arb_paragraph(), 1..8),
        separator in arb_blank_separator(),
        hint in prop::sample::select(vec!["chatgpt", "claude", "grok", "other"]),
    ) {
        let text = paragraphs.join(separator);
        let segments = segment_transcript(&text, hint);
        prop_assert_eq!(missing_word(&paragraphs, &segments), None);
    }
}
