// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Literal tag scanner.
//!
//! Finds `[A]`, `[B]`, `[C]` and `[Agent]` left to right, leftmost first and
//! without overlap.  Every offset it reports sits next to an ASCII bracket,
//! so slicing the input at those offsets never splits a multi-byte character.

use crate::Label;

/// One recognised tag and the span of content that belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch {
    pub label: Label,
    /// Byte offset of the opening `[`.
    pub start: usize,
    /// Byte offset just past the closing `]`.
    pub content_start: usize,
    /// Start of the next tag, or the input length for the last tag.
    pub content_end: usize,
}

impl TagMatch {
    /// The untrimmed content slice of `raw` owned by this tag.
    pub fn content<'a>(&self, raw: &'a str) -> &'a str {
        &raw[self.content_start..self.content_end]
    }
}

/// Iterator over the tags of a raw response.
pub struct TagScanner<'a> {
    raw: &'a str,
    next: Option<(Label, usize, usize)>,
}

impl<'a> TagScanner<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw, next: find_tag(raw, 0) }
    }
}

impl Iterator for TagScanner<'_> {
    type Item = TagMatch;

    fn next(&mut self) -> Option<TagMatch> {
        let (label, start, content_start) = self.next.take()?;
        self.next = find_tag(self.raw, content_start);
        let content_end = self.next.map_or(self.raw.len(), |(_, s, _)| s);
        Some(TagMatch { label, start, content_start, content_end })
    }
}

/// Locate the first tag at or after byte offset `from`.
/// Returns `(label, start of '[', offset past ']')`.
fn find_tag(raw: &str, from: usize) -> Option<(Label, usize, usize)> {
    let mut cursor = from;
    while let Some(rel) = raw.get(cursor..)?.find('[') {
        let start = cursor + rel;
        let rest = &raw[start..];
        for label in Label::TAGS {
            if let Some(marker) = label.marker() {
                if rest.starts_with(marker) {
                    return Some((label, start, start + marker.len()));
                }
            }
        }
        cursor = start + 1;
    }
    None
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
