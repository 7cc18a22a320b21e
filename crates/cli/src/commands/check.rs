// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `obot check <script>` - Parse a script without running it

use super::run::read_script;
use crate::output::{format_check, OutputFormat};
use crate::script::Script;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Script file, or `-` for stdin
    pub script: PathBuf,
}

pub fn handle(args: CheckArgs, format: OutputFormat) -> Result<()> {
    let source = read_script(&args.script)?;
    let script = Script::parse(&source)
        .map_err(|e| anyhow::anyhow!("invalid script {}: {}", args.script.display(), e))?;
    let label = args.script.display().to_string();
    println!("{}", format_check(&label, &script.stats(), format)?);
    Ok(())
}
