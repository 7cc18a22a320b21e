//! `obot check` specs

use crate::prelude::*;

#[test]
fn check_reports_counts() {
    let scratch = Scratch::new();
    let script = scratch.file("s.txt", "add-bot\nvip\nvip\nnormal\nwait 1000\n");

    cli()
        .args(&["check", &script])
        .passes()
        .stdout_eq(&format!(
            "{script}: ok, 5 step(s): 1 normal, 2 VIP, 1 bot(s) added, 0 removed, 1000ms waiting\n"
        ));
}

#[test]
fn check_does_not_run_anything() {
    let scratch = Scratch::new();
    let script = scratch.file("s.txt", "add-bot\nnormal\nwait 60000\n");

    // Would take a minute if it ran
    cli()
        .args(&["check", &script])
        .passes()
        .stdout_lacks("Created");
}

#[test]
fn check_json() {
    let scratch = Scratch::new();
    let script = scratch.file("s.txt", "remove-bot\n");

    let run = cli().args(&["check", &script, "-o", "json"]).passes();
    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(value["ok"], true);
    assert_eq!(value["stats"]["bots_removed"], 1);
}
