// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration text, e.g. `"1h30m"`, `"-2.5s"`, `"354h22m3.24s"`.
//!
//! Parsing and printing both go through jiff's friendly duration format.
//! Units above hours are rejected: a `SignedDuration` has no calendar.

use crate::error::ParseError;
use jiff::fmt::friendly;
use jiff::SignedDuration;

static COMPACT_PRINTER: friendly::SpanPrinter = friendly::SpanPrinter::new()
    .designator(friendly::Designator::Compact)
    .spacing(friendly::Spacing::None);

/// Parse duration text into a signed count of nanoseconds.
pub fn parse_duration(input: &str) -> Result<i64, ParseError> {
    let duration: SignedDuration = input.parse().map_err(|e: jiff::Error| ParseError::Invalid {
        input: input.to_string(),
        reason: e.to_string(),
    })?;
    i64::try_from(duration.as_nanos()).map_err(|_| ParseError::Overflow(input.to_string()))
}

/// Compact text for a nanosecond count: `"354h22m3s"`, `"-1h"`, `"0s"`.
pub fn format_nanos(nanos: i64) -> String {
    COMPACT_PRINTER.duration_to_string(&SignedDuration::from_nanos(nanos))
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
