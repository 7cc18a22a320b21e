// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Layered engine settings.
//!
//! Later layers win: built-in defaults, then the config file, then
//! `OBOT_PROCESSING_MS`, then command-line flags.

use crate::env;
use obot_engine::EngineConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {var} '{value}': expected a whole number of milliseconds")]
    Env { var: &'static str, value: String },

    #[error("processing time must be greater than zero")]
    ZeroProcessingTime,

    #[error("{key} = {value} is too large: ids are allocated upward from it")]
    IdBase { key: &'static str, value: u64 },
}

/// Contents of `config.toml`. Every key is optional.
///
/// ```toml
/// processing_ms = 10000
/// first_order_id = 1001
/// first_bot_id = 1
/// ```
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub processing_ms: Option<u64>,
    pub first_order_id: Option<u64>,
    pub first_bot_id: Option<u64>,
}

impl FileConfig {
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn apply(&self, config: &mut EngineConfig) {
        if let Some(ms) = self.processing_ms {
            config.processing_time = Duration::from_millis(ms);
        }
        if let Some(id) = self.first_order_id {
            config.first_order_id = id;
        }
        if let Some(id) = self.first_bot_id {
            config.first_bot_id = id;
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Explicit config file; it must exist
    pub config: Option<PathBuf>,
    pub processing_ms: Option<u64>,
}

/// `$XDG_CONFIG_HOME/obot/config.toml`, or the platform equivalent
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("obot").join("config.toml"))
}

/// Resolve the engine config from every layer.
pub fn load(overrides: &Overrides) -> Result<EngineConfig, ConfigError> {
    let mut config = EngineConfig::default();

    let file = match &overrides.config {
        Some(path) => Some(path.clone()),
        // The default file is optional
        None => default_path().filter(|path| path.is_file()),
    };
    if let Some(path) = file {
        tracing::debug!(path = %path.display(), "reading config file");
        FileConfig::load(&path)?.apply(&mut config);
    }

    if let Some(ms) = env_processing_ms()? {
        config.processing_time = Duration::from_millis(ms);
    }
    if let Some(ms) = overrides.processing_ms {
        config.processing_time = Duration::from_millis(ms);
    }

    validate(config)
}

/// Reject settings the engine cannot run with.
fn validate(config: EngineConfig) -> Result<EngineConfig, ConfigError> {
    if config.processing_time.is_zero() {
        return Err(ConfigError::ZeroProcessingTime);
    }
    if let Some((key, value)) = config.exhausted_id_base() {
        return Err(ConfigError::IdBase { key, value });
    }
    Ok(config)
}

fn env_processing_ms() -> Result<Option<u64>, ConfigError> {
    let Some(raw) = env::processing_ms_raw() else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Env {
            var: env::PROCESSING_MS,
            value: raw,
        })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
