// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! durafmt: human-readable durations.
//!
//! Turns `"354h22m3.24s"` into `"2 weeks 18 hours 22 minutes 3 seconds 240 milliseconds"`.

pub mod error;
pub mod format;
pub mod parse;
pub mod unit;

pub use error::{Error, ParseError};
pub use format::{Breakdown, Durafmt};
pub use parse::{format_nanos, parse_duration};
pub use unit::Unit;
