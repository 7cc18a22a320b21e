// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock that follows the tokio timer.

use obot_core::Clock;
use std::time::Instant;

/// Reads time from tokio so order timestamps agree with the bot timers,
/// including when tokio's clock is paused in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}
