// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced sink wrapper for consistent observability

use crate::sink::EventSink;
use obot_core::Event;

/// Wrapper that logs every event through `tracing` before delegating
#[derive(Clone)]
pub struct TracedSink<S> {
    inner: S,
}

impl<S> TracedSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: EventSink> EventSink for TracedSink<S> {
    fn emit(&self, event: &Event) {
        tracing::info_span!("sink.emit", event = event.name())
            .in_scope(|| tracing::info!("{}", event.log_summary()));
        self.inner.emit(event);
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
