//! Configuration layering specs

use crate::prelude::*;

const SCRIPT: &str = "add-bot\nvip\nwait 400\n";

#[test]
fn config_file_sets_ids() {
    let scratch = Scratch::new();
    let script = scratch.file("s.txt", SCRIPT);
    let config = scratch.file(
        "obot.toml",
        "processing_ms = 50\nfirst_order_id = 1\nfirst_bot_id = 10\n",
    );

    cli()
        .args(&["run", &script, "--config", &config])
        .passes()
        .stdout_has("Bot #10 picked up VIP Order #1 - Status: PROCESSING")
        .stdout_has("Bot #10 completed VIP Order #1");
}

#[test]
fn env_sets_processing_time() {
    let scratch = Scratch::new();
    let script = scratch.file("s.txt", SCRIPT);

    cli()
        .args(&["run", &script])
        .env("OBOT_PROCESSING_MS", "50")
        .passes()
        .stdout_has("Bot #1 completed VIP Order #1001");
}

#[test]
fn flag_beats_env() {
    let scratch = Scratch::new();
    let script = scratch.file("s.txt", SCRIPT);

    cli()
        .args(&["run", &script, "--processing-ms", "5000"])
        .env("OBOT_PROCESSING_MS", "50")
        .passes()
        .stdout_lacks("completed");
}

#[test]
fn invalid_config_file() {
    let scratch = Scratch::new();
    let script = scratch.file("s.txt", SCRIPT);
    let config = scratch.file("obot.toml", "processing_ms = \"soon\"\n");

    cli()
        .args(&["run", &script, "--config", &config])
        .fails()
        .stderr_has("invalid config");
}

#[test]
fn zero_processing_time_rejected() {
    let scratch = Scratch::new();
    let script = scratch.file("s.txt", SCRIPT);

    cli()
        .args(&["run", &script, "--processing-ms", "0"])
        .fails()
        .stderr_has("processing time must be greater than zero");
}
