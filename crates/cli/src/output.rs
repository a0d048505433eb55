// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use durafmt::Durafmt;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// JSON shape of one formatted duration.
#[derive(Debug, Serialize)]
struct Formatted<'a> {
    input: &'a str,
    nanos: i64,
    text: String,
}

/// Render one formatted duration as a single output line (without newline).
pub fn format_line(d: &Durafmt, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(d.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&Formatted {
            input: d.input(),
            nanos: d.duration(),
            text: d.to_string(),
        })?),
    }
}
