// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Memory citations embedded in a user prompt.
//!
//! Citing a memory prepends a line `[正在引用記憶：「<title>」]` to the prompt.
//! The bracketed form is not one of the segmentation tags, so it never splits
//! a response that echoes it.

use std::sync::OnceLock;

use regex::Regex;

use crate::Memory;

fn citation_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[正在引用記憶：「([^」]+)」\]").ok())
        .as_ref()
}

/// The citation marker for a memory title, without the trailing newline.
pub fn citation_line(title: &str) -> String {
    format!("[正在引用記憶：「{title}」]")
}

/// Prefix `input` with a citation of `memory`.
pub fn cite(memory: &Memory, input: &str) -> String {
    format!("{}\n{input}", citation_line(&memory.title))
}

/// Title of the first memory cited in `prompt`, if any.
pub fn cited_title(prompt: &str) -> Option<String> {
    citation_regex()?
        .captures(prompt)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
