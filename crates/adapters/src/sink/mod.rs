// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event sinks

mod console;
mod tee;
mod transcript;

pub use console::{ConsoleSink, LineFormat};
pub use tee::Tee;
pub use transcript::TranscriptSink;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSink;

use obot_core::Event;

/// Receiver for transitions, called once per transition in the order they
/// happen.
///
/// `emit` runs while the engine holds its state lock, so implementations
/// must return promptly and must never call back into the engine.
/// Timestamping and durable output are the sink's responsibility.
pub trait EventSink: Clone + Send + Sync + 'static {
    fn emit(&self, event: &Event);
}

/// Local wall-clock stamp used for transcript lines (`15:04:05`).
pub(crate) fn local_stamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Render an event as `[stamp] line` rows, one per message line.
pub(crate) fn stamped_lines(stamp: &str, event: &Event) -> Vec<String> {
    event
        .to_string()
        .split('\n')
        .map(|line| format!("[{}] {}", stamp, line))
        .collect()
}
