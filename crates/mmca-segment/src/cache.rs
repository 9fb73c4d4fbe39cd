// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tracing::trace;

use crate::{segment_with, PreamblePolicy, Segment};

/// Memoizes segmentation results keyed by the raw response text.
///
/// Re-rendering a conversation asks for the segments of every message again;
/// the cache hands back the previously computed list for an unchanged string.
pub struct SegmentCache {
    entries: LruCache<String, Arc<[Segment]>>,
    policy: PreamblePolicy,
}

impl SegmentCache {
    /// `capacity` of zero is treated as one.
    pub fn new(capacity: usize, policy: PreamblePolicy) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self { entries: LruCache::new(capacity), policy }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_or_segment(&mut self, raw: &str) -> Arc<[Segment]> {
        if let Some(hit) = self.entries.get(raw) {
            trace!(len = raw.len(), "segment cache hit");
            return Arc::clone(hit);
        }
        let segments: Arc<[Segment]> = segment_with(raw, self.policy).into();
        trace!(len = raw.len(), count = segments.len(), "segmented response");
        self.entries.put(raw.to_string(), Arc::clone(&segments));
        segments
    }
}

impl Default for SegmentCache {
    fn default() -> Self {
        Self::new(64, PreamblePolicy::default())
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
