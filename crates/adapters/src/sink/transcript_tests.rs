// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use obot_core::{BotId, OrderClass, OrderId, Summary};

fn fixed_stamp() -> String {
    "12:00:00".to_string()
}

#[test]
fn transcript_stamps_each_event() {
    let sink = TranscriptSink::with_stamp(fixed_stamp);

    sink.emit(&Event::BotCreated { bot: BotId::new(1) });
    sink.emit(&Event::OrderCreated {
        id: OrderId::new(1001),
        class: OrderClass::Normal,
    });

    assert_eq!(
        sink.lines(),
        vec![
            "[12:00:00] Bot #1 created - Status: ACTIVE",
            "[12:00:00] Created Normal Order #1001 - Status: PENDING",
        ]
    );
}

#[test]
fn transcript_splits_multi_line_messages() {
    let sink = TranscriptSink::with_stamp(fixed_stamp);
    sink.emit(&Event::FinalStatus {
        summary: Summary::default(),
    });

    let lines = sink.lines();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "[12:00:00] ");
    assert_eq!(lines[1], "[12:00:00] Final Status:");
}

#[test]
fn clones_share_buffer() {
    let sink = TranscriptSink::with_stamp(fixed_stamp);
    let other = sink.clone();
    other.emit(&Event::BotIdle { bot: BotId::new(4) });
    assert_eq!(sink.lines().len(), 1);
}

#[test]
fn save_writes_contents_and_creates_parent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scripts").join("result.txt");
    let sink = TranscriptSink::with_stamp(fixed_stamp);
    sink.emit(&Event::BotDestroyedIdle { bot: BotId::new(2) });

    sink.save(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "[12:00:00] Bot #2 destroyed while IDLE\n");
}

#[test]
fn default_stamp_is_clock_time() {
    let sink = TranscriptSink::new();
    sink.emit(&Event::BotCreated { bot: BotId::new(1) });
    let line = &sink.lines()[0];
    // "[HH:MM:SS] ..."
    assert_eq!(&line[0..1], "[");
    assert_eq!(&line[9..11], "] ");
    assert_eq!(&line[3..4], ":");
}
