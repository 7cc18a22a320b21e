// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

/// Point the default config lookup at an empty directory and clear the env
/// override, so the host's own settings never leak into a test.
fn isolate() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", dir.path());
    std::env::remove_var(env::PROCESSING_MS);
    dir
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("custom.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn parse_all_keys() {
    let parsed = FileConfig::parse(
        "processing_ms = 250\nfirst_order_id = 1\nfirst_bot_id = 7\n",
        Path::new("config.toml"),
    )
    .unwrap();
    assert_eq!(
        parsed,
        FileConfig {
            processing_ms: Some(250),
            first_order_id: Some(1),
            first_bot_id: Some(7),
        }
    );
}

#[test]
fn parse_empty_file() {
    let parsed = FileConfig::parse("", Path::new("config.toml")).unwrap();
    assert_eq!(parsed, FileConfig::default());
}

#[test]
fn parse_rejects_unknown_key() {
    let err = FileConfig::parse("bots = 3\n", Path::new("config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("invalid config config.toml"));
}

#[test]
fn parse_rejects_wrong_type() {
    let err = FileConfig::parse("processing_ms = \"fast\"\n", Path::new("c.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

// dirs only honors XDG_CONFIG_HOME on Linux
#[cfg(target_os = "linux")]
#[test]
#[serial]
fn defaults_without_any_layer() {
    let _dir = isolate();
    let config = load(&Overrides::default()).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn default_path_is_read_when_present() {
    let dir = isolate();
    fs::create_dir_all(dir.path().join("obot")).unwrap();
    fs::write(
        dir.path().join("obot/config.toml"),
        "processing_ms = 500\nfirst_order_id = 1\n",
    )
    .unwrap();

    let config = load(&Overrides::default()).unwrap();

    assert_eq!(config.processing_time, Duration::from_millis(500));
    assert_eq!(config.first_order_id, 1);
    assert_eq!(config.first_bot_id, 1);
}

#[test]
#[serial]
fn explicit_file_must_exist() {
    let dir = isolate();
    let overrides = Overrides {
        config: Some(dir.path().join("missing.toml")),
        processing_ms: None,
    };

    let err = load(&overrides).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
#[serial]
fn env_overrides_file() {
    let dir = isolate();
    let path = write_config(&dir, "processing_ms = 500\n");
    std::env::set_var(env::PROCESSING_MS, "300");

    let config = load(&Overrides {
        config: Some(path),
        processing_ms: None,
    })
    .unwrap();
    std::env::remove_var(env::PROCESSING_MS);

    assert_eq!(config.processing_time, Duration::from_millis(300));
}

#[test]
#[serial]
fn flag_overrides_env() {
    let _dir = isolate();
    std::env::set_var(env::PROCESSING_MS, "300");

    let config = load(&Overrides {
        config: None,
        processing_ms: Some(40),
    })
    .unwrap();
    std::env::remove_var(env::PROCESSING_MS);

    assert_eq!(config.processing_time, Duration::from_millis(40));
}

#[test]
#[serial]
fn invalid_env_value() {
    let _dir = isolate();
    std::env::set_var(env::PROCESSING_MS, "ten");

    let err = load(&Overrides::default()).unwrap_err();
    std::env::remove_var(env::PROCESSING_MS);

    assert_eq!(
        err.to_string(),
        "invalid OBOT_PROCESSING_MS 'ten': expected a whole number of milliseconds"
    );
}

#[test]
#[serial]
fn zero_processing_time_rejected() {
    let _dir = isolate();
    let err = load(&Overrides {
        config: None,
        processing_ms: Some(0),
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::ZeroProcessingTime));
}

#[yare::parameterized(
    order_base = { "first_order_id", EngineConfig { first_order_id: u64::MAX, ..EngineConfig::default() } },
    bot_base = { "first_bot_id", EngineConfig { first_bot_id: u64::MAX, ..EngineConfig::default() } },
)]
fn id_base_without_headroom_rejected(key: &str, config: EngineConfig) {
    let err = validate(config).unwrap_err();

    assert!(matches!(err, ConfigError::IdBase { key: k, value: u64::MAX } if k == key));
    assert_eq!(
        err.to_string(),
        format!("{key} = {} is too large: ids are allocated upward from it", u64::MAX)
    );
}

// TOML integers stop at i64::MAX, which still leaves headroom
#[test]
#[serial]
fn largest_file_id_base_accepted() {
    let dir = isolate();
    let path = write_config(&dir, &format!("first_order_id = {}\n", i64::MAX));

    let config = load(&Overrides {
        config: Some(path),
        processing_ms: None,
    })
    .unwrap();

    assert_eq!(config.first_order_id, i64::MAX as u64);
}
