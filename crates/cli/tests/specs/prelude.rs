//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing obot CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::process::Output;

/// Processing time for specs. Script waits are multiples of this with
/// generous slack.
pub const SPEC_PROCESSING_MS: &str = "50";

/// Create a CLI builder for obot commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
    /// Empty config home so the host's settings never apply
    config_home: tempfile::TempDir,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
            config_home: tempfile::tempdir().unwrap(),
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Feed text on stdin
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Build the command without running it
    pub fn command(self) -> (Command, tempfile::TempDir) {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_obot"));
        cmd.args(&self.args);

        cmd.env("XDG_CONFIG_HOME", self.config_home.path());
        cmd.env_remove("OBOT_PROCESSING_MS");
        cmd.env_remove("RUST_LOG");

        for (key, value) in self.envs {
            cmd.env(key, value);
        }
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }

        (cmd, self.config_home)
    }

    /// Run and require the given outcome
    fn run(self, expect_success: bool) -> RunAssert {
        let (mut cmd, _config_home) = self.command();
        let output = cmd.output().expect("obot should start");
        let run = RunAssert { output };
        if run.output.status.success() != expect_success {
            panic!(
                "expected {}, got exit code {:?}\n--- stdout\n{}\n--- stderr\n{}",
                if expect_success { "success" } else { "failure" },
                run.code(),
                run.stdout(),
                run.stderr()
            );
        }
        run
    }

    /// Run and expect exit code 0
    pub fn passes(self) -> RunAssert {
        self.run(true)
    }

    /// Run and expect a non-zero exit code
    pub fn fails(self) -> RunAssert {
        self.run(false)
    }
}

/// Captured result of one run, for chained assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    /// Exact stdout match, diffed on failure
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    /// Exact match on stdout with the `[HH:MM:SS] ` stamps removed
    pub fn messages_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(strip_stamps(&self.stdout()), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        check("stdout", &self.stdout(), needle, true);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        check("stdout", &self.stdout(), needle, false);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        check("stderr", &self.stderr(), needle, true);
        self
    }
}

fn check(stream: &str, text: &str, needle: &str, present: bool) {
    assert!(
        text.contains(needle) == present,
        "{stream} should {}contain {needle:?}\n--- {stream}\n{text}",
        if present { "" } else { "not " }
    );
}

/// Drop the leading `[HH:MM:SS] ` from every line.
pub fn strip_stamps(text: &str) -> String {
    text.lines()
        .map(|line| match line.strip_prefix('[') {
            Some(rest) if rest.get(8..10) == Some("] ") => &rest[10..],
            _ => line,
        })
        .fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
}

// =============================================================================
// Files
// =============================================================================

/// Temporary directory holding scripts and outputs for one test.
pub struct Scratch {
    dir: tempfile::TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file and return its full path as a string
    pub fn file(&self, name: &str, content: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.join(name)).unwrap()
    }
}
