// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! durafmt - format durations as human-readable text

mod config;
mod env;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use config::{FileConfig, Overrides, Settings};
use durafmt::Durafmt;
use output::OutputFormat;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "durafmt",
    version,
    about = "Format durations as human-readable text",
    after_help = "Negative durations go after `--`, e.g. `durafmt -- -1h30m`."
)]
struct Cli {
    /// Durations to format, e.g. "354h22m3.24s"
    #[arg(required = true, allow_negative_numbers = true, value_name = "DURATION")]
    durations: Vec<String>,

    /// Show only the first N units (0 shows all)
    #[arg(short = 'n', long, value_name = "N")]
    limit: Option<usize>,

    /// Show only the largest unit (same as --limit 1)
    #[arg(short, long, conflicts_with = "limit")]
    short: bool,

    /// Largest unit to show, e.g. "days"; larger units fold into it
    #[arg(short = 'u', long, value_name = "UNIT")]
    max_unit: Option<String>,

    /// Read durations as integer nanosecond counts
    #[arg(long)]
    nanos: bool,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,

    /// Config file (default: $XDG_CONFIG_HOME/durafmt/config.toml)
    #[arg(short = 'c', long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            limit: if self.short { Some(1) } else { self.limit },
            max_unit: self.max_unit.clone(),
        }
    }
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|f| EnvFilter::try_new(f).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an anyhow error for stderr.
///
/// `durafmt::Error` embeds its one-level `ParseError` source in its own
/// message, so that chain is dropped. Context added here (`--nanos` integer
/// parsing) wraps a std error with its own text and keeps "Caused by".
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    // Redundant when every source's text already appears in the top message
    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let explicit = cli.config.clone().or_else(env::config_path);
    let file = FileConfig::discover(explicit.as_deref(), env::default_config_path().as_deref())?;
    let env_overrides = Overrides {
        limit: env::limit(),
        max_unit: env::max_unit(),
    };
    let settings = Settings::resolve(&cli.overrides(), &env_overrides, &file)?;
    tracing::debug!(?settings, "resolved settings");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for input in &cli.durations {
        let d = settings.apply(build(input, cli.nanos)?);
        writeln!(out, "{}", output::format_line(&d, cli.output)?)?;
    }
    Ok(())
}

fn build(input: &str, nanos: bool) -> Result<Durafmt> {
    if nanos {
        let n: i64 = input
            .trim()
            .parse()
            .with_context(|| format!("invalid nanosecond count: {}", input))?;
        return Ok(Durafmt::new(n));
    }
    Ok(Durafmt::parse(input)?)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
