// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod events;
mod session;
mod state;
#[cfg(test)]
mod tests;

pub use events::SessionEvent;
pub use session::Session;
pub use state::{Action, ChatState, Message, Role};
