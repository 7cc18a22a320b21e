// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario scripts.
//!
//! One step per line. Blank lines and `#` comments are ignored:
//!
//! ```text
//! add-bot
//! normal
//! vip          # jumps ahead of the normal order
//! wait 12000
//! remove-bot
//! status
//! ```

use obot_core::duration_ms;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown step '{text}'")]
    UnknownStep { line: usize, text: String },

    #[error("line {line}: '{step}' takes no arguments, got '{text}'")]
    UnexpectedArgument {
        line: usize,
        step: &'static str,
        text: String,
    },

    #[error("line {line}: invalid wait '{text}': expected milliseconds")]
    InvalidWait { line: usize, text: String },
}

/// One scripted action against the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Normal,
    Vip,
    AddBot,
    RemoveBot,
    Wait(Duration),
    Status,
}

impl Step {
    pub fn keyword(&self) -> &'static str {
        match self {
            Step::Normal => "normal",
            Step::Vip => "vip",
            Step::AddBot => "add-bot",
            Step::RemoveBot => "remove-bot",
            Step::Wait(_) => "wait",
            Step::Status => "status",
        }
    }

    fn parse(line: usize, text: &str) -> Result<Self, ScriptError> {
        let mut words = text.split_whitespace();
        let keyword = words.next().unwrap_or_default();
        let rest: Vec<&str> = words.collect();

        let bare = |step: Step| {
            if rest.is_empty() {
                Ok(step)
            } else {
                Err(ScriptError::UnexpectedArgument {
                    line,
                    step: step.keyword(),
                    text: text.to_string(),
                })
            }
        };

        match keyword.to_ascii_lowercase().as_str() {
            "normal" => bare(Step::Normal),
            "vip" => bare(Step::Vip),
            "add-bot" => bare(Step::AddBot),
            "remove-bot" => bare(Step::RemoveBot),
            "status" => bare(Step::Status),
            "wait" => match rest.as_slice() {
                [ms] => ms
                    .parse::<u64>()
                    .map(|ms| Step::Wait(Duration::from_millis(ms)))
                    .map_err(|_| ScriptError::InvalidWait {
                        line,
                        text: text.to_string(),
                    }),
                _ => Err(ScriptError::InvalidWait {
                    line,
                    text: text.to_string(),
                }),
            },
            _ => Err(ScriptError::UnknownStep {
                line,
                text: text.to_string(),
            }),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Wait(d) => write!(f, "wait {}", d.as_millis()),
            other => f.write_str(other.keyword()),
        }
    }
}

/// A parsed scenario
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let mut steps = Vec::new();
        for (idx, raw) in source.lines().enumerate() {
            let text = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            }
            .trim();
            if text.is_empty() {
                continue;
            }
            steps.push(Step::parse(idx + 1, text)?);
        }
        Ok(Self { steps })
    }

    /// The built-in demo: VIP priority, a queue of mixed orders, and a second
    /// bot joining to drain it.
    pub fn demo() -> Self {
        let secs = |s| Step::Wait(Duration::from_secs(s));
        Self {
            steps: vec![
                Step::AddBot,
                Step::Normal,
                Step::Vip,
                secs(12),
                Step::Vip,
                Step::Vip,
                Step::Normal,
                Step::Normal,
                secs(12),
                Step::AddBot,
                secs(15),
                Step::Status,
            ],
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn stats(&self) -> ScriptStats {
        let mut stats = ScriptStats {
            steps: self.steps.len(),
            ..ScriptStats::default()
        };
        for step in &self.steps {
            match step {
                Step::Normal => stats.normal_orders += 1,
                Step::Vip => stats.vip_orders += 1,
                Step::AddBot => stats.bots_added += 1,
                Step::RemoveBot => stats.bots_removed += 1,
                Step::Wait(d) => stats.wait_ms += duration_ms(*d),
                Step::Status => {}
            }
        }
        stats
    }
}

/// What a script will do, counted without running it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScriptStats {
    pub steps: usize,
    pub normal_orders: usize,
    pub vip_orders: usize,
    pub bots_added: usize,
    pub bots_removed: usize,
    pub wait_ms: u64,
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
