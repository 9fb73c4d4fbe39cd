// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};

use crate::{Label, TagScanner};

/// A labelled, trimmed span of response text rendered as one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub label: Label,
    pub text: String,
}

impl Segment {
    pub fn new(label: Label, text: impl Into<String>) -> Self {
        Self { label, text: text.into() }
    }

    /// A void segment has no text after trimming and is never rendered.
    pub fn is_void(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// What to do with untagged text that precedes the first tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreamblePolicy {
    /// Replace the whole result with a single `Agent` segment holding the
    /// trimmed preamble.  Tagged content after it is dropped.
    #[default]
    Override,
    /// Emit the preamble as a leading `Unknown` segment and keep the tagged
    /// segments after it.
    Keep,
}

/// Split a complete response into labelled segments.
///
/// Equivalent to [`segment_with`] using [`PreamblePolicy::Override`].
pub fn segment(raw: &str) -> Vec<Segment> {
    segment_with(raw, PreamblePolicy::Override)
}

/// Split a complete response into labelled segments using `policy` for any
/// leading untagged text.
///
/// Void tag contents are dropped.  Input without any tag becomes a single
/// `Unknown` segment, or nothing when it is blank.
pub fn segment_with(raw: &str, policy: PreamblePolicy) -> Vec<Segment> {
    let mut scanner = TagScanner::new(raw).peekable();

    let first_start = match scanner.peek() {
        Some(m) => m.start,
        None => {
            let text = raw.trim();
            return if text.is_empty() {
                Vec::new()
            } else {
                vec![Segment::new(Label::Unknown, text)]
            };
        }
    };

    let preamble = raw[..first_start].trim();
    let mut segments = Vec::new();

    if first_start > 0 {
        match policy {
            // The preamble wins even when it is only whitespace.
            PreamblePolicy::Override => return vec![Segment::new(Label::Agent, preamble)],
            PreamblePolicy::Keep if !preamble.is_empty() => {
                segments.push(Segment::new(Label::Unknown, preamble));
            }
            PreamblePolicy::Keep => {}
        }
    }

    for m in scanner {
        let text = m.content(raw).trim();
        if !text.is_empty() {
            segments.push(Segment::new(m.label, text));
        }
    }
    segments
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
