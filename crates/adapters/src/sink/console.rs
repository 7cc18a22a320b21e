// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live console output.

use super::{local_stamp, stamped_lines, EventSink};
use obot_core::Event;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// How each event is rendered on the console
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineFormat {
    /// `[HH:MM:SS] message`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Writes events as they happen to stdout (or any writer).
///
/// Write failures are logged via tracing but do not propagate; output must
/// not break the engine.
#[derive(Clone)]
pub struct ConsoleSink {
    format: LineFormat,
    out: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl ConsoleSink {
    pub fn stdout(format: LineFormat) -> Self {
        Self::to_writer(format, std::io::stdout())
    }

    pub fn to_writer(format: LineFormat, writer: impl Write + Send + 'static) -> Self {
        Self {
            format,
            out: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    fn render(&self, event: &Event) -> Vec<String> {
        match self.format {
            LineFormat::Text => stamped_lines(&local_stamp(), event),
            LineFormat::Json => match serde_json::to_string(event) {
                Ok(json) => vec![json],
                Err(e) => {
                    tracing::warn!(event = event.name(), error = %e, "failed to encode event");
                    Vec::new()
                }
            },
        }
    }
}

impl EventSink for ConsoleSink {
    fn emit(&self, event: &Event) {
        let lines = self.render(event);
        let mut out = self.out.lock();
        for line in lines {
            if let Err(e) = writeln!(out, "{}", line) {
                tracing::warn!(error = %e, "failed to write event to console");
                return;
            }
        }
        if let Err(e) = out.flush() {
            tracing::warn!(error = %e, "failed to flush console");
        }
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
