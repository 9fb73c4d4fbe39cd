// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Print styled lines to a plain (non-alternate-screen) terminal.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{self as ct, Attribute, Print, SetAttribute, SetForegroundColor};
use ratatui::style::{Color, Modifier};
use ratatui::text::Line;

fn to_crossterm(color: Color) -> ct::Color {
    match color {
        Color::Reset => ct::Color::Reset,
        Color::Black => ct::Color::Black,
        Color::Red => ct::Color::DarkRed,
        Color::Green => ct::Color::DarkGreen,
        Color::Yellow => ct::Color::DarkYellow,
        Color::Blue => ct::Color::DarkBlue,
        Color::Magenta => ct::Color::DarkMagenta,
        Color::Cyan => ct::Color::DarkCyan,
        Color::Gray => ct::Color::Grey,
        Color::DarkGray => ct::Color::DarkGrey,
        Color::LightRed => ct::Color::Red,
        Color::LightGreen => ct::Color::Green,
        Color::LightYellow => ct::Color::Yellow,
        Color::LightBlue => ct::Color::Blue,
        Color::LightMagenta => ct::Color::Magenta,
        Color::LightCyan => ct::Color::Cyan,
        Color::White => ct::Color::White,
        Color::Rgb(r, g, b) => ct::Color::Rgb { r, g, b },
        Color::Indexed(i) => ct::Color::AnsiValue(i),
    }
}

/// Write `lines` to `out`, one terminal line each.  With `color` false only
/// the text is written.
pub fn write_lines<W: Write>(out: &mut W, lines: &[Line<'_>], color: bool) -> io::Result<()> {
    for line in lines {
        for span in &line.spans {
            if !color {
                out.write_all(span.content.as_bytes())?;
                continue;
            }
            let style = line.style.patch(span.style);
            if let Some(fg) = style.fg {
                queue!(out, SetForegroundColor(to_crossterm(fg)))?;
            }
            if style.add_modifier.contains(Modifier::BOLD) {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if style.add_modifier.contains(Modifier::ITALIC) {
                queue!(out, SetAttribute(Attribute::Italic))?;
            }
            queue!(out, Print(&span.content), SetAttribute(Attribute::Reset))?;
        }
        out.write_all(b"\n")?;
    }
    out.flush()
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
