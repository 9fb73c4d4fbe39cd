// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` to at most `width` display columns per line.
///
/// Explicit newlines are kept.  Lines break at spaces where possible; words
/// wider than `width` (including runs of CJK text, which has no spaces) are
/// broken between characters.  Trailing spaces are dropped from every line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for line in text.split('\n') {
        wrap_line(line.trim_end_matches('\r'), width, &mut out);
    }
    out
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut col = 0usize;

    for word in line.split_inclusive(' ') {
        let w = word.trim_end_matches(' ').width();
        if col > 0 && col + w > width {
            push_trimmed(out, &mut current);
            col = 0;
        }
        if w > width {
            for ch in word.chars() {
                let cw = ch.width().unwrap_or(0);
                if col > 0 && col + cw > width {
                    push_trimmed(out, &mut current);
                    col = 0;
                }
                current.push(ch);
                col += cw;
            }
        } else {
            current.push_str(word);
            col += word.width();
        }
    }
    push_trimmed(out, &mut current);
}

fn push_trimmed(out: &mut Vec<String>, current: &mut String) {
    let line = std::mem::take(current);
    out.push(line.trim_end_matches(' ').to_string());
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
