// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable rendering of a duration: `"2 weeks 18 hours 22 minutes"`.

use crate::error::Error;
use crate::parse::{format_nanos, parse_duration};
use crate::unit::Unit;
use std::fmt;

/// A duration paired with the options used to render it.
///
/// Build one with [`Durafmt::new`] or [`Durafmt::parse`], optionally narrow
/// the output with [`Durafmt::limit_first_n`] and [`Durafmt::limit_to_unit`],
/// then render it through `Display`:
///
/// ```
/// use durafmt::Durafmt;
///
/// let d = Durafmt::parse("354h22m3s").unwrap().limit_first_n(2);
/// assert_eq!(d.to_string(), "2 weeks 18 hours");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Durafmt {
    duration: i64,
    input: String,
    negative: bool,
    /// Unit named by a zero input such as `"0h"`.
    zero_unit: Option<Unit>,
    limit_n: usize,
    limit_unit: Option<Unit>,
}

impl Durafmt {
    /// Format a signed count of nanoseconds.
    pub fn new(nanos: i64) -> Self {
        Self::with_input(nanos, format_nanos(nanos))
    }

    /// Like [`Durafmt::new`], keeping only the largest unit.
    pub fn new_short(nanos: i64) -> Self {
        Self::new(nanos).limit_first_n(1)
    }

    /// Format a [`std::time::Duration`], saturating at `i64::MAX` nanoseconds.
    pub fn from_std(duration: std::time::Duration) -> Self {
        Self::new(i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX))
    }

    /// Parse duration text such as `"1h30m"` or `"-2.5s"`.
    ///
    /// A bare `"0"` or `"-0"` is rejected with [`Error::MissingUnit`] since it
    /// does not say which unit's zero to show.
    pub fn parse(input: &str) -> Result<Self, Error> {
        if input == "0" || input == "-0" {
            tracing::debug!(input, "rejected duration without unit");
            return Err(Error::MissingUnit(input.to_string()));
        }
        let nanos = parse_duration(input).map_err(|source| {
            tracing::debug!(input, error = %source, "rejected duration text");
            Error::InvalidDurationText {
                input: input.to_string(),
                source,
            }
        })?;
        Ok(Self::with_input(nanos, input.to_string()))
    }

    /// Like [`Durafmt::parse`], keeping only the largest unit.
    pub fn parse_short(input: &str) -> Result<Self, Error> {
        Ok(Self::parse(input)?.limit_first_n(1))
    }

    fn with_input(duration: i64, input: String) -> Self {
        let negative = input.starts_with('-');
        let zero_unit = if duration == 0 {
            zero_unit_of(&input)
        } else {
            None
        };
        Self {
            duration,
            input,
            negative,
            zero_unit,
            limit_n: 0,
            limit_unit: None,
        }
    }

    /// Never show a unit larger than `unit`; its magnitude folds into `unit`.
    /// `None` removes the ceiling.
    pub fn limit_to_unit(mut self, unit: Option<Unit>) -> Self {
        self.limit_unit = unit;
        self
    }

    /// Show only the first `n` unit/value pairs. `0` means no limit.
    pub fn limit_first_n(mut self, n: usize) -> Self {
        self.limit_n = n;
        self
    }

    /// The duration in nanoseconds.
    pub fn duration(&self) -> i64 {
        self.duration
    }

    /// The text the duration was built from, or its compact form (`"-1h30m"`)
    /// for typed constructors.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Maximum number of unit/value pairs shown; `0` means no limit.
    pub fn limit_n(&self) -> usize {
        self.limit_n
    }

    /// Largest unit shown, if the output is capped.
    pub fn limit_unit(&self) -> Option<Unit> {
        self.limit_unit
    }

    /// Per-unit breakdown of the duration's magnitude at microsecond
    /// resolution, honouring the unit ceiling.
    pub fn breakdown(&self) -> Breakdown {
        Breakdown::new(self.duration.unsigned_abs() / 1_000, self.limit_unit)
    }

    fn render(&self) -> String {
        let breakdown = self.breakdown();
        let start = self.limit_unit.map_or(0, Unit::rank);
        let mut parts: Vec<String> = Vec::new();
        for (unit, value) in breakdown.iter().skip(start) {
            match value {
                0 if self.zero_unit == Some(unit) => parts.push(format!("0 {}", unit.name())),
                0 => {}
                1 => parts.push(format!("1 {}", unit.singular())),
                v => parts.push(format!("{} {}", v, unit.name())),
            }
        }
        if self.limit_n > 0 {
            parts.truncate(self.limit_n);
        }

        let phrase = parts.join(" ");
        if self.negative {
            format!("-{}", phrase)
        } else {
            phrase
        }
    }
}

/// The unit whose zero `input` spells out exactly: `"0h"` → hours.
///
/// Multi-part zeros such as `"0h0m"` name no single unit.
fn zero_unit_of(input: &str) -> Option<Unit> {
    let rest = input.strip_prefix('-').unwrap_or(input);
    Unit::from_short_code(rest.strip_prefix('0')?)
}

impl fmt::Display for Durafmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Count of each unit in a duration, largest unit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Breakdown {
    values: [u64; Unit::COUNT],
}

impl Breakdown {
    /// Split `micros` into units by repeated division, carrying the remainder
    /// down. Units above `ceiling` stay zero.
    pub fn new(micros: u64, ceiling: Option<Unit>) -> Self {
        let start = ceiling.map_or(0, Unit::rank);
        let mut values = [0; Unit::COUNT];
        let mut remaining = micros;
        for unit in &Unit::ALL[start..] {
            values[unit.rank()] = remaining / unit.micros();
            remaining %= unit.micros();
        }
        tracing::trace!(micros, ?ceiling, ?values, "decomposed duration");
        Self { values }
    }

    /// Count for a single unit.
    pub fn get(&self, unit: Unit) -> u64 {
        self.values[unit.rank()]
    }

    /// `(unit, count)` pairs, largest unit first, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Unit, u64)> + '_ {
        Unit::ALL.into_iter().map(move |u| (u, self.get(u)))
    }

    /// Reassemble the breakdown into microseconds.
    pub fn total_micros(&self) -> u128 {
        self.iter()
            .map(|(unit, v)| u128::from(v) * u128::from(unit.micros()))
            .sum()
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
