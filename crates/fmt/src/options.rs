// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatting options and their resolved form.

use crate::language::Language;
use serde::{Deserialize, Serialize};

/// Widest fixed-point fraction the formatter will render.
const MAX_DECIMAL_DIGITS: u32 = 100;

/// Options for [`format`](crate::format).
///
/// Construct with struct-update syntax over the defaults:
///
/// ```ignore
/// use humanspan::FormatOptions;
///
/// let options = FormatOptions {
///     verbose: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Digital-clock style output (`"1:05:30"`). Switches off `compact`,
    /// `verbose`, `separate_milliseconds`, and `format_sub_milliseconds`.
    pub colon_notation: bool,
    /// Show only the first unit, prefixed with `~`. Forces both decimal
    /// digit counts to zero.
    pub compact: bool,
    /// Spelled-out unit names (`"5 minutes"` instead of `"5m"`).
    pub verbose: bool,
    /// Keep milliseconds as their own integer unit instead of folding
    /// them into the seconds decimal.
    pub separate_milliseconds: bool,
    /// Show milliseconds, microseconds, and nanoseconds as separate
    /// integer units.
    pub format_sub_milliseconds: bool,
    /// Decimal places on seconds when seconds is the smallest unit shown.
    pub seconds_decimal_digits: u32,
    /// Decimal places on milliseconds when they carry a folded fraction.
    pub milliseconds_decimal_digits: u32,
    /// Keep a zero fraction on whole seconds (`"5.0s"` instead of `"5s"`).
    pub keep_decimals_on_whole_seconds: bool,
    /// Cap the output at the first `n` units, prefixed with `~`. Values
    /// below one are treated as one.
    pub unit_count: Option<u32>,
    /// Label language.
    pub language: Language,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            colon_notation: false,
            compact: false,
            verbose: false,
            separate_milliseconds: false,
            format_sub_milliseconds: false,
            seconds_decimal_digits: 1,
            milliseconds_decimal_digits: 0,
            keep_decimals_on_whole_seconds: false,
            unit_count: None,
            language: Language::En,
        }
    }
}

impl FormatOptions {
    /// Apply the cross-flag overrides once, before formatting: colon
    /// notation switches off its four incompatible flags, then compact
    /// zeroes both decimal digit counts. Digit counts clamp to
    /// [`MAX_DECIMAL_DIGITS`].
    pub(crate) fn resolve(&self) -> ResolvedOptions {
        let colon_notation = self.colon_notation;
        let compact = self.compact && !colon_notation;
        let (seconds_decimal_digits, milliseconds_decimal_digits) = if compact {
            (0, 0)
        } else {
            (
                self.seconds_decimal_digits.min(MAX_DECIMAL_DIGITS),
                self.milliseconds_decimal_digits.min(MAX_DECIMAL_DIGITS),
            )
        };
        ResolvedOptions {
            colon_notation,
            compact,
            verbose: self.verbose && !colon_notation,
            separate_milliseconds: self.separate_milliseconds && !colon_notation,
            format_sub_milliseconds: self.format_sub_milliseconds && !colon_notation,
            seconds_decimal_digits,
            milliseconds_decimal_digits,
            keep_decimals_on_whole_seconds: self.keep_decimals_on_whole_seconds,
            unit_count: self.unit_count,
            language: self.language,
        }
    }
}

/// [`FormatOptions`] after the cross-flag overrides have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedOptions {
    pub colon_notation: bool,
    pub compact: bool,
    pub verbose: bool,
    pub separate_milliseconds: bool,
    pub format_sub_milliseconds: bool,
    pub seconds_decimal_digits: u32,
    pub milliseconds_decimal_digits: u32,
    pub keep_decimals_on_whole_seconds: bool,
    pub unit_count: Option<u32>,
    pub language: Language,
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
