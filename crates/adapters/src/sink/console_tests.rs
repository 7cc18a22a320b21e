// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use obot_core::{BotId, OrderClass, OrderId};

/// Shared buffer standing in for stdout
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).to_string()
    }
}

#[test]
fn json_format_writes_one_object_per_line() {
    let captured = Captured::default();
    let sink = ConsoleSink::to_writer(LineFormat::Json, captured.clone());

    sink.emit(&Event::OrderCreated {
        id: OrderId::new(1001),
        class: OrderClass::Vip,
    });
    sink.emit(&Event::BotCreated { bot: BotId::new(1) });

    let text = captured.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["type"], "order:created");
    assert_eq!(first["class"], "vip");
}

#[test]
fn text_format_writes_stamped_message() {
    let captured = Captured::default();
    let sink = ConsoleSink::to_writer(LineFormat::Text, captured.clone());

    sink.emit(&Event::BotDestroyedIdle { bot: BotId::new(3) });

    let text = captured.text();
    assert!(text.starts_with('['), "got: {text}");
    assert!(text.ends_with("] Bot #3 destroyed while IDLE\n"), "got: {text}");
}

/// Accepts writes, then refuses to flush
#[derive(Clone, Default)]
struct BrokenFlush(Captured);

impl Write for BrokenFlush {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
    }
}

#[test]
fn flush_failure_is_logged() {
    let out = BrokenFlush::default();
    let sink = ConsoleSink::to_writer(LineFormat::Text, out.clone());
    let logs = Captured::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        sink.emit(&Event::BotCreated { bot: BotId::new(1) });
    });

    assert!(out.0.text().ends_with("] Bot #1 created - Status: ACTIVE\n"));
    let logs = logs.text();
    assert!(logs.contains("failed to flush console"), "logs: {logs}");
    assert!(logs.contains("pipe closed"), "logs: {logs}");
}
