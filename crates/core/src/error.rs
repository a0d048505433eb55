// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for duration parsing and formatting.

use thiserror::Error;

/// Errors returned when building a [`crate::Durafmt`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The text is not a valid duration.
    #[error("durafmt: invalid duration text {input:?}: {source}")]
    InvalidDurationText { input: String, source: ParseError },

    /// The text is a bare zero, which names no unit.
    #[error("durafmt: missing unit in duration {0}")]
    MissingUnit(String),

    /// A unit selector that is not in the unit table.
    #[error("durafmt: unknown unit {0:?}")]
    UnknownUnit(String),
}

/// Errors from duration text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid duration {input:?}: {reason}")]
    Invalid { input: String, reason: String },

    #[error("duration {0:?} out of range")]
    Overflow(String),
}
