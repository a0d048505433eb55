// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The fixed table of units a duration is broken down into.
//!
//! Units are ordered largest first. The order is part of the output contract:
//! a rendered phrase never lists a smaller unit before a larger one.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unit of the breakdown, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Years,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
}

struct UnitInfo {
    name: &'static str,
    short: &'static str,
    micros: u64,
}

const MICROS_PER_SECOND: u64 = 1_000_000;
const SECONDS_PER_DAY: u64 = 24 * 3600;

// Indexed by `Unit as usize`.
static UNITS: [UnitInfo; Unit::COUNT] = TABLE;

const TABLE: [UnitInfo; Unit::COUNT] = [
    UnitInfo {
        name: "years",
        short: "y",
        micros: 365 * SECONDS_PER_DAY * MICROS_PER_SECOND,
    },
    UnitInfo {
        name: "weeks",
        short: "w",
        micros: 7 * SECONDS_PER_DAY * MICROS_PER_SECOND,
    },
    UnitInfo {
        name: "days",
        short: "d",
        micros: SECONDS_PER_DAY * MICROS_PER_SECOND,
    },
    UnitInfo {
        name: "hours",
        short: "h",
        micros: 3600 * MICROS_PER_SECOND,
    },
    UnitInfo {
        name: "minutes",
        short: "m",
        micros: 60 * MICROS_PER_SECOND,
    },
    UnitInfo {
        name: "seconds",
        short: "s",
        micros: MICROS_PER_SECOND,
    },
    UnitInfo {
        name: "milliseconds",
        short: "ms",
        micros: 1_000,
    },
    UnitInfo {
        name: "microseconds",
        short: "µs",
        micros: 1,
    },
];

// Factors must strictly decrease down the table and every name must carry
// the trailing plural marker that singular rendering strips.
const _: () = {
    let mut i = 1;
    while i < TABLE.len() {
        assert!(TABLE[i - 1].micros > TABLE[i].micros);
        i += 1;
    }
    let mut i = 0;
    while i < TABLE.len() {
        let name = TABLE[i].name.as_bytes();
        assert!(name[name.len() - 1] == b's');
        assert!(!TABLE[i].short.is_empty());
        i += 1;
    }
    assert!(TABLE[Unit::Microseconds as usize].micros == 1);
};

impl Unit {
    pub const COUNT: usize = 8;

    /// Every unit, largest first.
    pub const ALL: [Unit; Unit::COUNT] = [
        Unit::Years,
        Unit::Weeks,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
        Unit::Milliseconds,
        Unit::Microseconds,
    ];

    fn info(self) -> &'static UnitInfo {
        &UNITS[self as usize]
    }

    /// Plural name used in rendered output, e.g. `"hours"`.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Name used when the value is exactly one, e.g. `"hour"`.
    pub fn singular(self) -> &'static str {
        self.name().trim_end_matches('s')
    }

    /// Short code, e.g. `"h"` or `"ms"`.
    ///
    /// Only used to recognise which unit a textual zero such as `"0h"`
    /// referred to.
    pub fn short_code(self) -> &'static str {
        self.info().short
    }

    /// Length of one unit in microseconds.
    pub fn micros(self) -> u64 {
        self.info().micros
    }

    /// Position in [`Unit::ALL`]; 0 is the largest unit.
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Look up a unit by its short code.
    pub fn from_short_code(code: &str) -> Option<Unit> {
        Unit::ALL.into_iter().find(|u| u.short_code() == code)
    }

    /// Parse a unit-ceiling selector; an empty selector means no ceiling.
    pub fn parse_ceiling(s: &str) -> Result<Option<Unit>, Error> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        s.parse().map(Some)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = Error;

    /// Accepts the plural name, the singular name or the short code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Unit::ALL
            .into_iter()
            .find(|u| u.name() == s || u.singular() == s)
            .or_else(|| Unit::from_short_code(s))
            .or_else(|| (s == "us").then_some(Unit::Microseconds))
            .ok_or_else(|| Error::UnknownUnit(s.to_string()))
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
