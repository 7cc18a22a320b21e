//! Error reporting specs

use crate::prelude::*;

#[test]
fn bad_step_reports_line() {
    let scratch = Scratch::new();
    let script = scratch.file("bad.txt", "add-bot\n\nfry 2\n");

    let run = cli()
        .args(&["run", &script])
        .fails()
        .stderr_has("line 3: unknown step 'fry 2'");
    assert_eq!(run.code(), Some(1));
    assert_eq!(run.stdout(), "");
}

#[test]
fn check_rejects_bad_wait() {
    let scratch = Scratch::new();
    let script = scratch.file("bad.txt", "wait later\n");

    cli()
        .args(&["check", &script])
        .fails()
        .stderr_has("Error: invalid script")
        .stderr_has("line 1: invalid wait 'wait later'");
}

#[test]
fn missing_script_file() {
    cli()
        .args(&["run", "/nonexistent/obot-script.txt"])
        .fails()
        .stderr_has("Error: failed to read script");
}

#[test]
fn unknown_command() {
    cli().args(&["bake"]).fails();
}
