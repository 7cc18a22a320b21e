// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake event sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::EventSink;
use obot_core::Event;
use parking_lot::Mutex;
use std::sync::Arc;

/// Records every emitted event in order
#[derive(Clone, Default)]
pub struct FakeSink {
    inner: Arc<Mutex<Vec<Event>>>,
}

impl FakeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded events
    pub fn events(&self) -> Vec<Event> {
        self.inner.lock().clone()
    }

    /// Get the transcript messages of all recorded events
    pub fn messages(&self) -> Vec<String> {
        self.inner.lock().iter().map(|e| e.to_string()).collect()
    }

    /// Get recorded event names (e.g. `"order:created"`)
    pub fn names(&self) -> Vec<&'static str> {
        self.inner.lock().iter().map(Event::name).collect()
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl EventSink for FakeSink {
    fn emit(&self, event: &Event) {
        self.inner.lock().push(event.clone());
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
