// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Processing-time formatting for transcript messages.

use std::time::Duration;

/// Whole seconds with an `s` suffix, truncating (`9_999` ms is `"9s"`).
///
/// Long durations stay in seconds: `75_000` ms is `"75s"`.
pub fn format_secs(ms: u64) -> String {
    format!("{}s", ms / 1000)
}

/// Milliseconds in `d`, saturating at `u64::MAX`.
pub fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
