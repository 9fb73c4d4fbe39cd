// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::sync::Arc;

use mmca_segment::Segment;

use crate::Message;

/// Events emitted by the session during a single turn.
/// Consumers (CLI printer, tests) subscribe to these to drive their output.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The user's message was added to the conversation
    UserMessage(Message),
    /// The loading indicator changed
    Loading(bool),
    /// The provider failed; the fallback message follows as `AgentReply`
    ProviderFailed(String),
    /// The agent's reply was added, with its segments ready for rendering
    AgentReply {
        message: Message,
        segments: Arc<[Segment]>,
    },
}
