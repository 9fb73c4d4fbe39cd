// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use mmca_segment::PreamblePolicy;

/// Serde default helper — returns `true`.
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub segment: SegmentConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the mock response and memory providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Simulated network delay before a response is returned, in milliseconds
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
    /// Simulated delay before the memory list is returned, in milliseconds
    #[serde(default = "default_memory_delay_ms")]
    pub memory_delay_ms: u64,
    /// Upper bound on a single response in seconds (0 = no limit)
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_response_delay_ms() -> u64 {
    1200
}
fn default_memory_delay_ms() -> u64 {
    500
}

impl ProviderConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    pub fn memory_delay(&self) -> Duration {
        Duration::from_millis(self.memory_delay_ms)
    }

    /// `None` when no timeout is configured.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
            memory_delay_ms: default_memory_delay_ms(),
            timeout_secs: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// First agent message shown when a conversation starts
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Response substituted when the provider fails.  It is segmented like
    /// any other response, so it should carry its own tag.
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
}

fn default_greeting() -> String {
    "[Agent] 您好！我是多模型協作 Agent。我已經連接到 Gemini，可以回答您的問題了。您可以打開左側的記憶體面板來查看過去的對話。".into()
}
fn default_fallback_message() -> String {
    "[Agent] 很抱歉，處理您的請求時發生錯誤，請稍後再試。".into()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            fallback_message: default_fallback_message(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Handling of untagged text before the first tag: "override" | "keep".
    ///
    /// `override` shows only the preamble (as an Agent card) and drops the
    /// tagged parts after it.  `keep` shows the preamble as a plain card
    /// followed by the tagged parts.
    #[serde(default)]
    pub preamble: PreamblePolicy,
    /// Number of distinct responses whose segments are memoized
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_cache_capacity() -> usize {
    64
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            preamble: PreamblePolicy::default(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Wrap width for card bodies in display columns (0 = 80)
    #[serde(default = "default_width")]
    pub width: u16,
    /// Use plain ASCII icons and bars.  Can also be forced with the
    /// MMCA_ASCII=1 environment variable.
    #[serde(default)]
    pub ascii: bool,
    /// Emit ANSI colours
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_width() -> u16 {
    80
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { width: default_width(), ascii: false, color: true }
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
