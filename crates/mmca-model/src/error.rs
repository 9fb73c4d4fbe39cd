// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("response provider unavailable: {0}")]
    Unavailable(String),

    #[error("no scripted responses left")]
    Exhausted,

    #[error("response timed out after {0:?}")]
    Timeout(std::time::Duration),
}
