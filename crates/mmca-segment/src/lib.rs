// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Tagged-response segmentation.
//!
//! A single agent response may concatenate several sub-answers, each opened
//! by an inline tag (`[A]`, `[B]`, `[C]`, `[Agent]`).  [`segment`] splits such
//! a response into an ordered list of labelled [`Segment`]s that a renderer
//! can draw as independent cards.

mod cache;
mod label;
pub mod presentation;
mod scanner;
mod segmenter;

pub use cache::SegmentCache;
pub use label::Label;
pub use presentation::{Accent, Presentation};
pub use scanner::{TagMatch, TagScanner};
pub use segmenter::{segment, segment_with, PreamblePolicy, Segment};
