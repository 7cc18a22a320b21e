// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fan-out to two sinks.

use super::EventSink;
use obot_core::Event;

/// Forwards every event to `first`, then `second`.
#[derive(Clone, Debug, Default)]
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A, B> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: EventSink, B: EventSink> EventSink for Tee<A, B> {
    fn emit(&self, event: &Event) {
        self.first.emit(event);
        self.second.emit(event);
    }
}

#[cfg(test)]
#[path = "tee_tests.rs"]
mod tests;
