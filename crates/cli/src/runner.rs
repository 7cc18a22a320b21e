// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Drives a controller through a script

use crate::script::{Script, Step};
use obot_adapters::EventSink;
use obot_core::{Clock, Summary};
use obot_engine::{Controller, EngineError};

/// Run every step in order.
///
/// Returns the summary printed by the last `status` step, or the state at
/// the end of the script when it has none. Stops at the first step the
/// engine refuses.
pub async fn execute<S, C>(ctrl: &Controller<S, C>, script: &Script) -> Result<Summary, EngineError>
where
    S: EventSink,
    C: Clock,
{
    tracing::debug!(steps = script.len(), "running script");
    let mut reported = None;
    for (idx, step) in script.steps().iter().enumerate() {
        tracing::debug!(step = idx + 1, %step, "running step");
        match step {
            Step::Normal => {
                ctrl.create_normal_order()?;
            }
            Step::Vip => {
                ctrl.create_vip_order()?;
            }
            Step::AddBot => {
                ctrl.add_bot()?;
            }
            Step::RemoveBot => {
                if ctrl.remove_bot().is_none() {
                    tracing::info!(step = idx + 1, "no bot to remove");
                }
            }
            Step::Wait(duration) => ctrl.wait(*duration).await,
            Step::Status => reported = Some(ctrl.print_status()),
        }
    }
    Ok(reported.unwrap_or_else(|| ctrl.summary()))
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
