// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory timestamped transcript.

use super::{local_stamp, stamped_lines, EventSink};
use obot_core::Event;
use parking_lot::Mutex;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Buffers every event as `[HH:MM:SS] message` lines.
///
/// Multi-line messages (the final status block) get one stamped line each.
/// Clones share the same buffer.
#[derive(Clone)]
pub struct TranscriptSink {
    lines: Arc<Mutex<Vec<String>>>,
    stamp: fn() -> String,
}

impl Default for TranscriptSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptSink {
    pub fn new() -> Self {
        Self::with_stamp(local_stamp)
    }

    /// Use a custom timestamp source.
    pub fn with_stamp(stamp: fn() -> String) -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
            stamp,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Whole transcript, newline-terminated.
    pub fn contents(&self) -> String {
        let lines = self.lines.lock();
        let mut out = String::new();
        for line in lines.iter() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Write the transcript to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.contents())
    }
}

impl EventSink for TranscriptSink {
    fn emit(&self, event: &Event) {
        let stamp = (self.stamp)();
        self.lines.lock().extend(stamped_lines(&stamp, event));
    }
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod tests;
