// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting a millisecond count into whole days, hours, minutes, seconds,
//! and sub-second parts.

use serde::{Deserialize, Serialize};

/// Whole remainders of a duration at each unit scale.
///
/// `days` is unbounded; every other field stays inside the range of its
/// parent unit (`hours` in `-23..=23`, `minutes` and `seconds` in
/// `-59..=59`, the sub-second fields in `-999..=999`). A non-negative
/// input produces only non-negative fields; a negative input produces
/// only non-positive ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    pub microseconds: i64,
    pub nanoseconds: i64,
}

/// Decompose `milliseconds` into [`TimeParts`].
///
/// Each field is the truncated quotient at its scale, reduced modulo the
/// next larger unit. Fractional milliseconds land in the `microseconds`
/// and `nanoseconds` fields; anything finer than a nanosecond is dropped.
/// Day counts beyond `i64` range saturate, and a NaN input yields
/// all-zero parts.
pub fn decompose(milliseconds: f64) -> TimeParts {
    TimeParts {
        days: (milliseconds / 86_400_000.0).trunc() as i64,
        hours: ((milliseconds / 3_600_000.0).trunc() % 24.0) as i64,
        minutes: ((milliseconds / 60_000.0).trunc() % 60.0) as i64,
        seconds: ((milliseconds / 1_000.0).trunc() % 60.0) as i64,
        milliseconds: (milliseconds.trunc() % 1_000.0) as i64,
        microseconds: ((milliseconds * 1_000.0).trunc() % 1_000.0) as i64,
        nanoseconds: ((milliseconds * 1_000_000.0).trunc() % 1_000.0) as i64,
    }
}

#[cfg(test)]
#[path = "decompose_tests.rs"]
mod tests;
