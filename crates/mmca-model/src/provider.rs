// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use async_trait::async_trait;

use crate::{Memory, ProviderError};

#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Human-readable provider name for status display.
    fn name(&self) -> &str;

    /// Produce the complete (tagged) response for `prompt`.
    ///
    /// `memories` is the list currently known to the client; providers may
    /// use it to resolve citations.
    async fn respond(&self, prompt: &str, memories: &[Memory]) -> Result<String, ProviderError>;
}

#[async_trait]
pub trait MemoryProvider: Send + Sync {
    /// Fetch the memories of past conversations.
    async fn list(&self) -> Result<Vec<Memory>, ProviderError>;
}
