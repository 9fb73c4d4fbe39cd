// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Response and memory providers.
//!
//! The real backend is out of reach of the client; the providers here simulate
//! it with canned, tagged responses and a fixed memory list.

pub mod citation;
mod error;
mod memory;
mod mock;
mod provider;

pub use error::ProviderError;
pub use memory::{builtin_memories, Memory};
pub use mock::{MockMemories, MockProvider, ScriptedMockProvider};
pub use provider::{MemoryProvider, ResponseProvider};
