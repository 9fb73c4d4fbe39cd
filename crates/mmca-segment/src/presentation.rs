// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Static label → card title / icon / accent lookup used by renderers.

use crate::Label;

/// Renderer-neutral accent colour of a segment card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Indigo,
    Green,
    Amber,
    Rose,
    Gray,
}

/// How a segment with a given label is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub title: &'static str,
    pub icon: &'static str,
    /// Fallback for terminals without wide Unicode glyphs.
    pub ascii_icon: &'static str,
    pub accent: Accent,
}

impl Presentation {
    pub fn icon(&self, ascii: bool) -> &'static str {
        if ascii { self.ascii_icon } else { self.icon }
    }
}

const MODEL_A: Presentation = Presentation {
    title: "模型 A：初步答案",
    icon: "✦",
    ascii_icon: "*",
    accent: Accent::Indigo,
};

const MODEL_B: Presentation = Presentation {
    title: "模型 B：事實核查",
    icon: "✔",
    ascii_icon: "+",
    accent: Accent::Green,
};

const MODEL_C: Presentation = Presentation {
    title: "模型 C：補充延伸",
    icon: "☰",
    ascii_icon: "=",
    accent: Accent::Amber,
};

const AGENT: Presentation = Presentation {
    title: "Agent：綜合回應",
    icon: "◆",
    ascii_icon: "#",
    accent: Accent::Rose,
};

const UNKNOWN: Presentation = Presentation {
    title: "回應",
    icon: "◆",
    ascii_icon: "#",
    accent: Accent::Gray,
};

pub fn presentation(label: Label) -> &'static Presentation {
    match label {
        Label::A => &MODEL_A,
        Label::B => &MODEL_B,
        Label::C => &MODEL_C,
        Label::Agent => &AGENT,
        Label::Unknown => &UNKNOWN,
    }
}

impl Label {
    pub fn presentation(self) -> &'static Presentation {
        presentation(self)
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
