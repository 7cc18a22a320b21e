// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cancellable fixed-duration work

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// How a unit of work ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkOutcome {
    /// The full duration elapsed and the completion callback ran
    Elapsed,
    /// Cancel was requested (or the handle dropped) before the duration elapsed
    Cancelled,
}

/// Handle to one processing cycle of a bot.
///
/// The spawned task waits for either the duration or the cancel signal. The
/// cancel branch is polled first, so a cancel that is already raised when the
/// timer fires always wins. The signal is single-use; each cycle gets a
/// fresh handle.
pub struct WorkHandle {
    cancel: Option<oneshot::Sender<()>>,
    task: JoinHandle<WorkOutcome>,
}

impl WorkHandle {
    /// Start a timer on `runtime` that runs `on_elapsed` once `duration`
    /// passes without cancellation.
    pub fn spawn<F>(runtime: &Handle, duration: Duration, on_elapsed: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let task = runtime.spawn(async move {
            let outcome = race(duration, cancel_rx).await;
            if outcome == WorkOutcome::Elapsed {
                on_elapsed();
            }
            outcome
        });
        Self {
            cancel: Some(cancel_tx),
            task,
        }
    }

    /// Request cancellation.
    ///
    /// Returns `true` if the signal reached the task before its timer
    /// resolved. Later calls return `false`.
    pub fn cancel(&mut self) -> bool {
        match self.cancel.take() {
            Some(tx) => tx.send(()).is_ok(),
            None => false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the task to end. `None` if it panicked or was aborted.
    pub async fn outcome(self) -> Option<WorkOutcome> {
        self.task.await.ok()
    }
}

async fn race(duration: Duration, mut cancel: oneshot::Receiver<()>) -> WorkOutcome {
    tokio::select! {
        biased;
        // A dropped sender counts as a cancel
        _ = &mut cancel => WorkOutcome::Cancelled,
        _ = tokio::time::sleep(duration) => WorkOutcome::Elapsed,
    }
}

#[cfg(test)]
#[path = "work_tests.rs"]
mod tests;
