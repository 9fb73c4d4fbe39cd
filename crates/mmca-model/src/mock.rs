// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use mmca_config::ProviderConfig;
use tracing::debug;

use crate::{builtin_memories, citation, Memory, MemoryProvider, ProviderError, ResponseProvider};

/// Simulated multi-model backend.  After the configured delay it answers
/// every prompt with an `[A]`/`[B]`/`[C]`/`[Agent]` tagged response.
///
/// `MockProvider::default()` answers immediately.
#[derive(Debug, Default, Clone)]
pub struct MockProvider {
    delay: Duration,
}

impl MockProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(cfg: &ProviderConfig) -> Self {
        Self::new(cfg.response_delay())
    }

    /// The response text for `prompt`, without any delay.
    pub fn compose(prompt: &str) -> String {
        match citation::cited_title(prompt) {
            Some(title) => format!(
                "[A] 已收到您對記憶「{title}」的引用。該內容已被整合到本次回應的上下文中。\n\
                 [B] 所引用的記憶有效，且與當前查詢相關。\n\
                 [C] 補充說明，整合過去的對話能讓交流更連貫、更具情境感知能力。\n\
                 [Agent] 根據您的查詢以及所引用的記憶「{title}」，這是在整合該知識後的回應。"
            ),
            None => format!(
                "[A] 根據您的查詢「{prompt}」，初步評估這是一個有效且有趣的問題。\n\
                 [B] 事實核查完畢。查詢的前提是合理的，沒有明顯矛盾。\n\
                 [C] 為了提供更多背景資訊，通常可以考慮此主題與更廣泛的行業趨勢和未來可能性的關聯。\n\
                 [Agent] 總結來說，您的請求「{prompt}」已處理完畢。這是一個格式良好的查詢，開啟了多個可供探索的方向。"
            ),
        }
    }
}

#[async_trait]
impl ResponseProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn respond(&self, prompt: &str, memories: &[Memory]) -> Result<String, ProviderError> {
        debug!(prompt_len = prompt.len(), memories = memories.len(), "simulating agent response");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Self::compose(prompt))
    }
}

/// A pre-scripted provider.  Each call to `respond` pops the next scripted
/// result from the front of the queue, which lets tests drive failures as
/// well as exact response texts.
pub struct ScriptedMockProvider {
    scripts: Mutex<VecDeque<Result<String, ProviderError>>>,
    delay: Duration,
    /// The last prompt seen by this provider.
    pub last_prompt: Arc<Mutex<Option<String>>>,
}

impl ScriptedMockProvider {
    pub fn new(scripts: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            scripts: Mutex::new(scripts.into()),
            delay: Duration::ZERO,
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// Convenience: provider that returns a single text reply.
    pub fn always_text(reply: impl Into<String>) -> Self {
        Self::new(vec![Ok(reply.into())])
    }

    /// Convenience: provider whose only call fails.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::new(vec![Err(ProviderError::Unavailable(reason.into()))])
    }

    /// Wait `delay` before every reply.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl ResponseProvider for ScriptedMockProvider {
    fn name(&self) -> &str {
        "scripted-mock"
    }

    async fn respond(&self, prompt: &str, _memories: &[Memory]) -> Result<String, ProviderError> {
        *self.last_prompt.lock().unwrap_or_else(PoisonError::into_inner) = Some(prompt.to_string());
        let next = self
            .scripts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        next.unwrap_or(Err(ProviderError::Exhausted))
    }
}

/// Serves the built-in memory list after a simulated delay.
#[derive(Debug, Clone)]
pub struct MockMemories {
    delay: Duration,
    memories: Vec<Memory>,
}

impl MockMemories {
    pub fn new(delay: Duration) -> Self {
        Self { delay, memories: builtin_memories() }
    }

    pub fn from_config(cfg: &ProviderConfig) -> Self {
        Self::new(cfg.memory_delay())
    }

    pub fn with_memories(mut self, memories: Vec<Memory>) -> Self {
        self.memories = memories;
        self
    }
}

impl Default for MockMemories {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl MemoryProvider for MockMemories {
    async fn list(&self) -> Result<Vec<Memory>, ProviderError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.memories.clone())
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_response_carries_all_four_tags_in_order() {
        let reply = MockProvider::default().respond("天氣如何", &[]).await.unwrap();
        let positions: Vec<usize> = ["[A]", "[B]", "[C]", "[Agent]"]
            .iter()
            .map(|t| reply.find(t).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(reply.starts_with("[A]"));
        assert!(reply.contains("「天氣如何」"));
    }

    #[tokio::test]
    async fn cited_prompt_uses_citation_template() {
        let memories = builtin_memories();
        let prompt = citation::cite(&memories[0], "繼續");
        let reply = MockProvider::default().respond(&prompt, &memories).await.unwrap();
        assert!(reply.contains("已收到您對記憶「PWA 部署策略」的引用"));
        assert!(!reply.contains("繼續"));
    }

    #[tokio::test(start_paused = true)]
    async fn mock_waits_for_configured_delay() {
        let p = MockProvider::new(Duration::from_millis(1200));
        let started = tokio::time::Instant::now();
        p.respond("x", &[]).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1200));
    }

    #[tokio::test]
    async fn scripted_replies_in_order_then_exhausts() {
        let p = ScriptedMockProvider::new(vec![
            Ok("[A] one".into()),
            Err(ProviderError::Unavailable("down".into())),
        ]);
        assert_eq!(p.respond("q1", &[]).await.unwrap(), "[A] one");
        assert!(matches!(p.respond("q2", &[]).await, Err(ProviderError::Unavailable(_))));
        assert!(matches!(p.respond("q3", &[]).await, Err(ProviderError::Exhausted)));
        assert_eq!(p.last_prompt.lock().unwrap().as_deref(), Some("q3"));
    }

    #[tokio::test]
    async fn memories_are_served() {
        let list = MockMemories::default().list().await.unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].id, "mem-1");
    }
}
