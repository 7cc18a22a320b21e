// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod demo;
pub mod run;

use crate::output::OutputFormat;
use crate::runner;
use crate::script::Script;
use anyhow::{Context, Result};
use obot_adapters::{ConsoleSink, Tee, TracedSink, TranscriptSink};
use obot_core::Summary;
use obot_engine::{Controller, EngineConfig};
use std::path::PathBuf;

/// Settings for commands that drive the engine
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config: EngineConfig,
    pub format: OutputFormat,
    /// Where to save the transcript once the script ends
    pub transcript: Option<PathBuf>,
}

/// Run `script` on a fresh controller, streaming events to stdout.
pub async fn execute(script: &Script, opts: &RunOptions) -> Result<Summary> {
    let transcript = TranscriptSink::new();
    let console = ConsoleSink::stdout(opts.format.into());
    let sink = TracedSink::new(Tee::new(console, transcript.clone()));

    let ctrl = Controller::new(sink, opts.config.clone())?;
    let summary = runner::execute(&ctrl, script).await?;
    // Cancels whatever is still processing
    drop(ctrl);

    if let Some(path) = &opts.transcript {
        transcript
            .save(path)
            .with_context(|| format!("failed to write transcript {}", path.display()))?;
        tracing::info!(path = %path.display(), lines = transcript.lines().len(), "transcript saved");
    }
    Ok(summary)
}
