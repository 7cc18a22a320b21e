// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

/// Overrides the configured processing time, in milliseconds
pub const PROCESSING_MS: &str = "OBOT_PROCESSING_MS";

/// Read OBOT_PROCESSING_MS raw; empty counts as unset
pub fn processing_ms_raw() -> Option<String> {
    std::env::var(PROCESSING_MS)
        .ok()
        .filter(|s| !s.trim().is_empty())
}
