// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Terminal presentation of segmented responses.

mod ansi;
mod card;
mod wrap;

pub use ansi::write_lines;
pub use card::{accent_color, render_segments, render_user, StyledLines};
pub use wrap::wrap_text;
