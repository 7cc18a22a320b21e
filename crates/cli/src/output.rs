// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::script::ScriptStats;
use clap::ValueEnum;
use obot_adapters::LineFormat;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<OutputFormat> for LineFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => LineFormat::Text,
            OutputFormat::Json => LineFormat::Json,
        }
    }
}

/// Render the result of `obot check` for one script.
pub fn format_check(source: &str, stats: &ScriptStats, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{source}: ok, {} step(s): {} normal, {} VIP, {} bot(s) added, {} removed, {}ms waiting",
            stats.steps,
            stats.normal_orders,
            stats.vip_orders,
            stats.bots_added,
            stats.bots_removed,
            stats.wait_ms
        )),
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "script": source,
                "ok": true,
                "stats": stats,
            });
            Ok(serde_json::to_string_pretty(&obj)?)
        }
    }
}
