// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use mmca_segment::{Accent, Segment};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::wrap::wrap_text;

/// A styled line ready for Ratatui rendering.
pub type StyledLines = Vec<Line<'static>>;

fn bar(ascii: bool) -> &'static str {
    if ascii { "| " } else { "▌ " }
}

pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Indigo => Color::Rgb(129, 140, 248),
        Accent::Green => Color::Rgb(74, 222, 128),
        Accent::Amber => Color::Rgb(251, 191, 36),
        Accent::Rose => Color::Rgb(251, 113, 133),
        Accent::Gray => Color::Rgb(156, 163, 175),
    }
}

/// Render each non-void segment as a card: a title line in the label's accent
/// colour followed by the wrapped body, all behind an accent bar.  Cards are
/// separated by a blank line.
pub fn render_segments(segments: &[Segment], width: u16, ascii: bool) -> StyledLines {
    let width = if width == 0 { 80 } else { width as usize };
    let bar = bar(ascii);
    let body_width = width.saturating_sub(bar.width()).max(1);
    let mut lines: StyledLines = Vec::new();

    for seg in segments.iter().filter(|s| !s.is_void()) {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        let p = seg.label.presentation();
        let accent = Style::default().fg(accent_color(p.accent));
        lines.push(Line::from(vec![
            Span::styled(bar, accent),
            Span::styled(
                format!("{} {}", p.icon(ascii), p.title),
                accent.add_modifier(Modifier::BOLD),
            ),
        ]));
        for text in wrap_text(&seg.text, body_width) {
            lines.push(Line::from(vec![Span::styled(bar, accent), Span::raw(text)]));
        }
    }

    lines
}

/// Render a user message right-aligned, the way a chat bubble sits on the
/// right-hand side of the conversation.
pub fn render_user(text: &str, width: u16) -> StyledLines {
    let width = if width == 0 { 80 } else { width as usize };
    let body_width = (width * 3 / 4).max(1);
    let style = Style::default().fg(Color::LightBlue);

    wrap_text(text.trim(), body_width)
        .into_iter()
        .map(|l| {
            let pad = width.saturating_sub(l.width());
            Line::from(vec![Span::raw(" ".repeat(pad)), Span::styled(l, style)])
        })
        .collect()
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mmca_segment::{segment, Label};

    fn plain(lines: &StyledLines) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn one_card_per_segment_with_titles() {
        let out = plain(&render_segments(&segment("[A]foo[Agent]bar"), 40, false));
        assert_eq!(
            out,
            vec![
                "▌ ✦ 模型 A：初步答案",
                "▌ foo",
                "",
                "▌ ◆ Agent：綜合回應",
                "▌ bar",
            ]
        );
    }

    #[test]
    fn void_segments_render_nothing() {
        let segs = vec![Segment::new(Label::Agent, ""), Segment::new(Label::A, "  ")];
        assert!(render_segments(&segs, 40, false).is_empty());
        assert!(render_segments(&segment("  [A] dropped"), 40, false).is_empty());
    }

    #[test]
    fn ascii_mode_avoids_wide_glyphs() {
        let out = plain(&render_segments(&segment("[B] checked"), 40, true));
        assert_eq!(out[0], "| + 模型 B：事實核查");
        assert_eq!(out[1], "| checked");
    }

    #[test]
    fn body_is_wrapped_inside_bar() {
        let out = plain(&render_segments(&segment("[C] aaaa bbbb cccc"), 11, false));
        assert_eq!(&out[1..], &["▌ aaaa bbbb", "▌ cccc"]);
    }

    #[test]
    fn title_uses_accent_colour() {
        let lines = render_segments(&segment("[A] x"), 40, false);
        assert_eq!(lines[0].spans[1].style.fg, Some(accent_color(Accent::Indigo)));
        assert!(lines[0].spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn user_text_is_right_aligned() {
        let out = plain(&render_user("hi", 10));
        assert_eq!(out, vec!["        hi"]);
    }
}
