// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::fmt;

use serde::{Deserialize, Serialize};

/// Origin of a response segment.
///
/// `A`, `B`, `C` and `Agent` correspond to the recognised inline tags.
/// `Unknown` marks text that carried no tag at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    A,
    B,
    C,
    Agent,
    Unknown,
}

impl Label {
    /// The labels that have a bracketed tag form, in canonical order.
    pub const TAGS: [Label; 4] = [Label::A, Label::B, Label::C, Label::Agent];

    /// Name as written inside the brackets (`"Agent"` for `[Agent]`).
    pub fn as_str(self) -> &'static str {
        match self {
            Label::A => "A",
            Label::B => "B",
            Label::C => "C",
            Label::Agent => "Agent",
            Label::Unknown => "Unknown",
        }
    }

    /// The literal delimiter for this label, or `None` for `Unknown`.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Label::A => Some("[A]"),
            Label::B => Some("[B]"),
            Label::C => Some("[C]"),
            Label::Agent => Some("[Agent]"),
            Label::Unknown => None,
        }
    }

    /// Resolve a tag name exactly as it appears between the brackets.
    /// Case-sensitive; `"Unknown"` is not a tag and yields `None`.
    pub fn from_tag_name(name: &str) -> Option<Label> {
        Label::TAGS.into_iter().find(|l| l.as_str() == name)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
