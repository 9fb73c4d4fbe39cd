// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Conversation state and the actions that mutate it.
//!
//! `ChatState` is the single owner of the message list, the memory list, the
//! loading flag, the sidebar flag and the pending input.  Every change goes
//! through [`ChatState::apply`]; the fields are `pub` for read access only.

use chrono::{DateTime, Utc};
use mmca_model::{citation, Memory};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

/// One entry in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn with_prefix(prefix: &str, role: Role, content: impl Into<String>) -> Self {
        Self {
            id: format!("{prefix}-{}", Uuid::new_v4()),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::with_prefix("user", Role::User, content)
    }

    pub fn agent(content: impl Into<String>) -> Self {
        Self::with_prefix("agent", Role::Agent, content)
    }

    /// An agent message standing in for a failed response.
    pub fn error(content: impl Into<String>) -> Self {
        Self::with_prefix("error", Role::Agent, content)
    }

    /// The opening agent message of a conversation.
    pub fn greeting(content: impl Into<String>) -> Self {
        Self {
            id: "init".into(),
            role: Role::Agent,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    AppendMessage(Message),
    SetLoading(bool),
    ToggleSidebar,
    OpenSidebar,
    CloseSidebar,
    SetInput(String),
    SetMemories(Vec<Memory>),
    /// Prefix the pending input with a citation and close the sidebar.
    CiteMemory(Memory),
    /// Drop the conversation and pending input; memories are kept.
    Reset,
}

#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub memories: Vec<Memory>,
    pub loading: bool,
    pub sidebar_open: bool,
    pub input: String,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A state whose conversation opens with `greeting`.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut state = Self::new();
        state.apply(Action::AppendMessage(Message::greeting(greeting)));
        state
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::AppendMessage(m) => self.messages.push(m),
            Action::SetLoading(on) => self.loading = on,
            Action::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            Action::OpenSidebar => self.sidebar_open = true,
            Action::CloseSidebar => self.sidebar_open = false,
            Action::SetInput(text) => self.input = text,
            Action::SetMemories(list) => self.memories = list,
            Action::CiteMemory(memory) => {
                self.input = citation::cite(&memory, &self.input);
                self.sidebar_open = false;
            }
            Action::Reset => {
                self.messages.clear();
                self.input.clear();
                self.loading = false;
            }
        }
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Look up a known memory by exact title.
    pub fn memory_by_title(&self, title: &str) -> Option<&Memory> {
        self.memories.iter().find(|m| m.title == title)
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
