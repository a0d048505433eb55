// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatting settings merged from flags, environment and the config file.
//!
//! Precedence, highest first: command-line flag, environment variable,
//! config file, built-in default (no limit, no unit ceiling).

use durafmt::{Durafmt, Unit};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Unit(#[from] durafmt::Error),
}

/// Contents of `config.toml`.
///
/// ```toml
/// limit = 2
/// max_unit = "days"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub max_unit: Option<String>,
}

impl FileConfig {
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    /// Load the explicit config file, or the default one if it exists.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn discover(
        explicit: Option<&Path>,
        default: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config file");
            return Self::load(path);
        }
        match default {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading default config file");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Values supplied by one source (flags or environment).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub limit: Option<usize>,
    pub max_unit: Option<String>,
}

/// Fully resolved formatting options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub limit: usize,
    pub max_unit: Option<Unit>,
}

impl Settings {
    pub fn resolve(
        flags: &Overrides,
        env: &Overrides,
        file: &FileConfig,
    ) -> Result<Self, ConfigError> {
        let limit = flags.limit.or(env.limit).or(file.limit).unwrap_or(0);
        let max_unit = match flags
            .max_unit
            .as_deref()
            .or(env.max_unit.as_deref())
            .or(file.max_unit.as_deref())
        {
            Some(selector) => Unit::parse_ceiling(selector)?,
            None => None,
        };
        Ok(Self { limit, max_unit })
    }

    pub fn apply(&self, d: Durafmt) -> Durafmt {
        d.limit_first_n(self.limit).limit_to_unit(self.max_unit)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
