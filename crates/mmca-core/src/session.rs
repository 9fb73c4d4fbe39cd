// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::sync::Arc;

use mmca_config::Config;
use mmca_model::{Memory, MemoryProvider, ProviderError, ResponseProvider};
use mmca_segment::{Segment, SegmentCache};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::{Action, ChatState, Message, SessionEvent};

/// Drives a conversation: owns the [`ChatState`], talks to the providers and
/// segments agent replies for rendering.
pub struct Session {
    state: ChatState,
    config: Arc<Config>,
    responder: Arc<dyn ResponseProvider>,
    memories: Arc<dyn MemoryProvider>,
    cache: SegmentCache,
}

impl Session {
    pub fn new(
        config: Arc<Config>,
        responder: Arc<dyn ResponseProvider>,
        memories: Arc<dyn MemoryProvider>,
    ) -> Self {
        let cache = SegmentCache::new(config.segment.cache_capacity, config.segment.preamble);
        let state = ChatState::with_greeting(config.chat.greeting.clone());
        Self { state, config, responder, memories, cache }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state.apply(action);
    }

    /// Fetch the memory list and store it in the state.
    pub async fn load_memories(&mut self) -> anyhow::Result<usize> {
        let list = self.memories.list().await?;
        let count = list.len();
        debug!(count, "memories loaded");
        self.state.apply(Action::SetMemories(list));
        Ok(count)
    }

    /// Segments of an agent message.  User messages are shown verbatim and
    /// are never segmented.
    pub fn segments_for(&mut self, message: &Message) -> Arc<[Segment]> {
        if message.is_user() {
            return Arc::from(Vec::new());
        }
        self.cache.get_or_segment(&message.content)
    }

    /// Send the pending input to the response provider.
    ///
    /// Blank input is ignored and yields `Ok(None)`.  A provider failure does
    /// not fail the turn: the configured fallback message is appended in
    /// place of the reply.
    pub async fn submit(&mut self, tx: &mpsc::Sender<SessionEvent>) -> anyhow::Result<Option<Message>> {
        if self.state.input.trim().is_empty() {
            return Ok(None);
        }

        let prompt = std::mem::take(&mut self.state.input);
        let user = Message::user(prompt.clone());
        self.state.apply(Action::AppendMessage(user.clone()));
        let _ = tx.send(SessionEvent::UserMessage(user)).await;

        self.state.apply(Action::SetLoading(true));
        let _ = tx.send(SessionEvent::Loading(true)).await;

        let reply = match self.request(&prompt).await {
            Ok(text) => Message::agent(text),
            Err(e) => {
                warn!(provider = self.responder.name(), error = %e, "failed to get response");
                let _ = tx.send(SessionEvent::ProviderFailed(e.to_string())).await;
                Message::error(self.config.chat.fallback_message.clone())
            }
        };

        let segments = self.segments_for(&reply);
        self.state.apply(Action::AppendMessage(reply.clone()));
        self.state.apply(Action::SetLoading(false));
        let _ = tx.send(SessionEvent::Loading(false)).await;
        let _ = tx
            .send(SessionEvent::AgentReply { message: reply.clone(), segments })
            .await;

        Ok(Some(reply))
    }

    /// Submit one typed line, optionally citing `cite`.
    ///
    /// A blank line is dropped before the citation is applied, so citing
    /// never turns an empty line into a turn.
    pub async fn submit_line(
        &mut self,
        line: String,
        cite: Option<&Memory>,
        tx: &mpsc::Sender<SessionEvent>,
    ) -> anyhow::Result<Option<Message>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        self.state.apply(Action::SetInput(line));
        if let Some(m) = cite {
            self.state.apply(Action::CiteMemory(m.clone()));
        }
        self.submit(tx).await
    }

    async fn request(&self, prompt: &str) -> Result<String, ProviderError> {
        let fut = self.responder.respond(prompt, &self.state.memories);
        match self.config.provider.timeout() {
            Some(limit) => tokio::time::timeout(limit, fut)
                .await
                .unwrap_or(Err(ProviderError::Timeout(limit))),
            None => fut.await,
        }
    }
}
