// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! obot - order bot simulator CLI

mod commands;
mod config;
mod env;
mod output;
mod runner;
mod script;

use output::OutputFormat;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{check, demo, run, RunOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "obot",
    version,
    about = "Order bots - priority order queue served by a pool of bots"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Config file (defaults to $XDG_CONFIG_HOME/obot/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Time a bot spends on each order, in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    processing_ms: Option<u64>,

    /// Write the timestamped transcript to this file on exit
    #[arg(long, global = true, value_name = "PATH")]
    transcript: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demo scenario
    Demo,
    /// Run a scenario script
    Run(run::RunArgs),
    /// Validate a scenario script without running it
    Check(check::CheckArgs),
}

fn cli_command() -> clap::Command {
    Cli::command()
}

#[tokio::main]
async fn main() {
    setup_logging();
    if let Err(e) = run().await {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for the event stream.
///
/// `RUST_LOG` overrides the default `warn` filter.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If every cause already appears in the top-level message the chain is
/// skipped; otherwise it is rendered in full.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand provided: print help and exit 0
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    // check never touches the engine, so it skips config loading
    if let Commands::Check(args) = command {
        return check::handle(args, format);
    }

    let overrides = config::Overrides {
        config: cli.config,
        processing_ms: cli.processing_ms,
    };
    let engine = config::load(&overrides)?;
    tracing::debug!(?engine, "loaded config");

    let opts = RunOptions {
        config: engine,
        format,
        transcript: cli.transcript,
    };

    match command {
        Commands::Demo => demo::handle(&opts).await?,
        Commands::Run(args) => run::handle(args, &opts).await?,
        Commands::Check(_) => unreachable!(),
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
