// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine tuning knobs

use crate::error::EngineError;
use std::time::Duration;

/// Default time a bot spends on one order
pub const DEFAULT_PROCESSING_TIME: Duration = Duration::from_secs(10);
/// ID given to the first order
pub const DEFAULT_FIRST_ORDER_ID: u64 = 1001;
/// ID given to the first bot
pub const DEFAULT_FIRST_BOT_ID: u64 = 1;

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed duration of every order
    pub processing_time: Duration,
    pub first_order_id: u64,
    pub first_bot_id: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            processing_time: DEFAULT_PROCESSING_TIME,
            first_order_id: DEFAULT_FIRST_ORDER_ID,
            first_bot_id: DEFAULT_FIRST_BOT_ID,
        }
    }
}

impl EngineConfig {
    /// The first id base that cannot be incremented, as `(key, value)`.
    pub fn exhausted_id_base(&self) -> Option<(&'static str, u64)> {
        [
            ("first_order_id", self.first_order_id),
            ("first_bot_id", self.first_bot_id),
        ]
        .into_iter()
        .find(|(_, base)| base.checked_add(1).is_none())
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        match self.exhausted_id_base() {
            Some((key, value)) => Err(EngineError::IdBase { key, value }),
            None => Ok(()),
        }
    }

    pub fn with_processing_time(mut self, processing_time: Duration) -> Self {
        self.processing_time = processing_time;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
