// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `obot demo` - Run the built-in scenario

use super::{execute, RunOptions};
use crate::script::Script;
use anyhow::Result;

pub async fn handle(opts: &RunOptions) -> Result<()> {
    execute(&Script::demo(), opts).await?;
    Ok(())
}
