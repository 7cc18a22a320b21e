// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `obot run <script>` - Run a scenario script

use super::{execute, RunOptions};
use crate::script::Script;
use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct RunArgs {
    /// Script file, or `-` for stdin
    pub script: PathBuf,
}

pub async fn handle(args: RunArgs, opts: &RunOptions) -> Result<()> {
    let source = read_script(&args.script)?;
    let script = Script::parse(&source)
        .map_err(|e| anyhow::anyhow!("invalid script {}: {}", args.script.display(), e))?;
    if script.is_empty() {
        tracing::warn!(script = %args.script.display(), "script has no steps");
    }
    execute(&script, opts).await?;
    Ok(())
}

/// Read a script from a file, or stdin when the path is `-`.
pub fn read_script(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read script from stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
