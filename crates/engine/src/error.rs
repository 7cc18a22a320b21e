// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine

use obot_core::IdExhausted;
use thiserror::Error;

/// Errors that can occur in the engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("controller must be created inside a tokio runtime")]
    NoRuntime,
    #[error("invariant violated: {0}")]
    Invariant(String),
    #[error("{key} = {value} leaves no room for a second id")]
    IdBase { key: &'static str, value: u64 },
    #[error(transparent)]
    Ids(#[from] IdExhausted),
}
