// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

// --- Formatting defaults ---

/// DURAFMT_LIMIT, ignored when it is not a non-negative integer.
pub fn limit() -> Option<usize> {
    std::env::var("DURAFMT_LIMIT")
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
}

/// DURAFMT_MAX_UNIT; an empty value clears a ceiling set in the config file.
pub fn max_unit() -> Option<String> {
    std::env::var("DURAFMT_MAX_UNIT").ok()
}

// --- Config file ---

/// Explicit config file from DURAFMT_CONFIG.
pub fn config_path() -> Option<PathBuf> {
    std::env::var("DURAFMT_CONFIG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Default config file: XDG_CONFIG_HOME/durafmt/config.toml > ~/.config/durafmt/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("durafmt/config.toml"));
        }
    }
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/durafmt/config.toml"))
}

// --- Logging ---

pub fn log_filter() -> Option<String> {
    std::env::var("DURAFMT_LOG").ok().filter(|s| !s.is_empty())
}
