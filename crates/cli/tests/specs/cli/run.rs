//! `obot run` specs
//!
//! Scripts run in real time with a short processing time.

use crate::prelude::*;

#[test]
fn vip_served_before_earlier_normal() {
    let scratch = Scratch::new();
    let script = scratch.file(
        "priority.txt",
        "normal\nvip\nadd-bot\nwait 400\nstatus\n",
    );

    cli()
        .args(&["run", &script, "--processing-ms", SPEC_PROCESSING_MS])
        .passes()
        .messages_eq(
            "\
Created Normal Order #1001 - Status: PENDING
Created VIP Order #1002 - Status: PENDING
Bot #1 created - Status: ACTIVE
Bot #1 picked up VIP Order #1002 - Status: PROCESSING
Bot #1 completed VIP Order #1002 - Status: COMPLETE (Processing time: 0s)
Bot #1 picked up Normal Order #1001 - Status: PROCESSING
Bot #1 completed Normal Order #1001 - Status: COMPLETE (Processing time: 0s)
Bot #1 is now IDLE - No pending orders

Final Status:
- Total Orders Processed: 2 (1 VIP, 1 Normal)
- Orders Completed: 2
- Active Bots: 1
- Pending Orders: 0
",
        );
}

#[test]
fn removing_busy_bot_returns_order() {
    let scratch = Scratch::new();
    let script = scratch.file("remove.txt", "add-bot\nnormal\nremove-bot\nstatus\n");

    cli()
        .args(&["run", &script, "--processing-ms", "5000"])
        .passes()
        .messages_eq(
            "\
Bot #1 created - Status: ACTIVE
Created Normal Order #1001 - Status: PENDING
Bot #1 picked up Normal Order #1001 - Status: PROCESSING
Bot #1 destroyed while processing Order #1001 - Order returned to PENDING

Final Status:
- Total Orders Processed: 0 (0 VIP, 0 Normal)
- Orders Completed: 0
- Active Bots: 0
- Pending Orders: 1
",
        );
}

#[test]
fn remove_on_empty_pool_is_silent() {
    let scratch = Scratch::new();
    let script = scratch.file("empty.txt", "remove-bot\n");

    cli().args(&["run", &script]).passes().stdout_eq("");
}

#[test]
fn script_from_stdin() {
    cli()
        .args(&["run", "-"])
        .stdin("# one bot, nothing to do\nadd-bot\n")
        .passes()
        .messages_eq("Bot #1 created - Status: ACTIVE\n");
}

#[test]
fn json_output_is_one_event_per_line() {
    let scratch = Scratch::new();
    let script = scratch.file("json.txt", "vip\nstatus\n");

    let run = cli()
        .args(&["run", &script, "-o", "json"])
        .passes();
    let lines: Vec<serde_json::Value> = run
        .stdout()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["type"], "order:created");
    assert_eq!(lines[0]["id"], 1001);
    assert_eq!(lines[0]["class"], "vip");
    assert_eq!(lines[1]["type"], "status:final");
    assert_eq!(lines[1]["summary"]["pending"], 1);
}

#[test]
fn transcript_is_saved() {
    let scratch = Scratch::new();
    let script = scratch.file("t.txt", "add-bot\nvip\n");
    let transcript = scratch.join("out/result.txt");

    cli()
        .args(&[
            "run",
            &script,
            "--transcript",
            &transcript.to_string_lossy(),
        ])
        .passes();

    let saved = scratch.read("out/result.txt");
    similar_asserts::assert_eq!(
        strip_stamps(&saved),
        "\
Bot #1 created - Status: ACTIVE
Created VIP Order #1001 - Status: PENDING
Bot #1 picked up VIP Order #1001 - Status: PROCESSING
"
    );
    assert!(saved.starts_with('['));
}
