//! CLI help output specs

use crate::prelude::*;

#[test]
fn obot_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn obot_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("demo")
        .stdout_has("run")
        .stdout_has("check");
}

#[test]
fn obot_run_help_shows_usage() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--processing-ms");
}

#[test]
fn obot_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
