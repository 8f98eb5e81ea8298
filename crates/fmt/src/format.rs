// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The duration formatting algorithm.

use std::time::Duration;

use humanspan_parse::{decompose, TimeParts};
use thiserror::Error;

use crate::language::{Language, Unit, UnitLabels};
use crate::options::{FormatOptions, ResolvedOptions};

/// Formatting errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FormatError {
    /// The millisecond count was NaN or infinite.
    #[error("expected a finite millisecond count, got {0}")]
    InvalidArgument(f64),
}

/// Format a millisecond count as a human-readable duration string.
///
/// Rounds the magnitude per the decimal-digit options, decomposes it into
/// units, drops zero-valued columns, and joins what remains per the
/// notation selected in `options`. A negative count formats as its
/// absolute value with `-` prepended to the finished string; the sign is
/// dropped when the magnitude renders as the zero fallback, so the output
/// is never `"-0ms"`.
///
/// # Examples
///
/// ```ignore
/// use humanspan::{format, FormatOptions};
///
/// assert_eq!(format(1_337_000_000.0, &FormatOptions::default())?, "15d 11h 23m 20s");
/// assert_eq!(format(1_337.0, &FormatOptions::default())?, "1.3s");
/// ```
///
/// # Errors
///
/// Returns [`FormatError::InvalidArgument`] when `milliseconds` is NaN or
/// infinite.
pub fn format(milliseconds: f64, options: &FormatOptions) -> Result<String, FormatError> {
    if !milliseconds.is_finite() {
        return Err(FormatError::InvalidArgument(milliseconds));
    }
    Ok(format_finite(milliseconds, &options.resolve()))
}

/// Format a [`Duration`] as a human-readable duration string.
///
/// Infallible companion to [`format`]: a `Duration` is always finite and
/// non-negative.
///
/// # Examples
///
/// ```ignore
/// use std::time::Duration;
///
/// use humanspan::{format_duration, FormatOptions};
///
/// assert_eq!(format_duration(Duration::from_secs(90), &FormatOptions::default()), "1m 30s");
/// ```
pub fn format_duration(duration: Duration, options: &FormatOptions) -> String {
    format_finite(duration.as_secs_f64() * 1_000.0, &options.resolve())
}

/// Render a finite millisecond count under resolved options.
fn format_finite(milliseconds: f64, options: &ResolvedOptions) -> String {
    let negative = milliseconds < 0.0;
    let mut ms = milliseconds.abs();

    // 1. Round up to the next whole second when the seconds column will
    //    carry no decimals
    if options.seconds_decimal_digits < 1 {
        let difference = 1_000.0 - ms % 1_000.0;
        if difference < 500.0 {
            ms += difference;
        }
    }

    // 2. Decompose and collect columns, largest unit first
    let parsed = decompose(ms);
    let mut list = FragmentList::new(options);
    list.push_int(parsed.days / 365, Unit::Years);
    list.push_int(parsed.days % 365, Unit::Days);
    list.push_int(parsed.hours, Unit::Hours);
    list.push_int(parsed.minutes, Unit::Minutes);

    // 3. Seconds and below: whole-unit columns down to nanoseconds, or a
    //    single column carrying everything smaller in its fraction
    if options.separate_milliseconds || options.format_sub_milliseconds || ms < 1_000.0 {
        list.push_int(parsed.seconds, Unit::Seconds);
        if options.format_sub_milliseconds {
            list.push_int(parsed.milliseconds, Unit::Milliseconds);
            list.push_int(parsed.microseconds, Unit::Microseconds);
            list.push_int(parsed.nanoseconds, Unit::Nanoseconds);
        } else {
            list.push_folded_milliseconds(&parsed);
        }
    } else {
        list.push_fractional_seconds(ms);
    }
    let fragments = list.into_fragments();

    // 4. Nothing survived the zero filter
    if fragments.is_empty() {
        let label = options.language.labels().label(Unit::Milliseconds);
        return if options.verbose {
            format!("0 {}", label.long)
        } else {
            format!("0{}", label.short)
        };
    }

    // 5. Join per notation
    let joined = if options.compact {
        format!("~{}", fragments[0])
    } else if let Some(count) = options.unit_count {
        let take = (count.max(1) as usize).min(fragments.len());
        format!("~{}", fragments[..take].join(" "))
    } else if options.colon_notation {
        fragments.concat()
    } else {
        fragments.join(" ")
    };

    if negative {
        format!("-{joined}")
    } else {
        joined
    }
}

/// Rendered unit columns in display order, with the zero filter and the
/// per-notation column shape applied as they are pushed.
struct FragmentList<'a> {
    options: &'a ResolvedOptions,
    labels: &'static UnitLabels,
    fragments: Vec<String>,
}

impl<'a> FragmentList<'a> {
    fn new(options: &'a ResolvedOptions) -> Self {
        Self {
            options,
            labels: options.language.labels(),
            fragments: Vec::new(),
        }
    }

    fn push_int(&mut self, value: i64, unit: Unit) {
        self.push(value as f64, unit, value.to_string());
    }

    /// Milliseconds column with microseconds and nanoseconds folded into
    /// its fraction. Without decimal digits the fold rounds up, so any
    /// sub-millisecond remainder still registers.
    fn push_folded_milliseconds(&mut self, parsed: &TimeParts) {
        let folded = parsed.milliseconds as f64
            + parsed.microseconds as f64 / 1_000.0
            + parsed.nanoseconds as f64 / 1_000_000.0;
        let digits = self.options.milliseconds_decimal_digits;
        if digits > 0 {
            let value = round_decimals(folded, digits);
            self.push(value, Unit::Milliseconds, fixed(value, digits));
        } else {
            let value = folded.ceil();
            self.push(value, Unit::Milliseconds, whole(value));
        }
    }

    /// Seconds column with everything smaller folded into its fraction.
    /// An all-zero fraction is dropped from the rendering unless
    /// `keep_decimals_on_whole_seconds` holds it in place.
    fn push_fractional_seconds(&mut self, ms: f64) {
        let digits = self.options.seconds_decimal_digits;
        let value = round_decimals((ms / 1_000.0) % 60.0, digits);
        let rendered = if !self.options.keep_decimals_on_whole_seconds && value.fract() == 0.0 {
            whole(value)
        } else {
            fixed(value, digits)
        };
        self.push(value, Unit::Seconds, rendered);
    }

    /// Append one unit column. `rendered` is the exact digit string to
    /// display; `value` is its numeric counterpart, consulted by the zero
    /// filter and pluralization.
    fn push(&mut self, value: f64, unit: Unit, rendered: String) {
        if self.should_skip(value, unit) {
            return;
        }
        let fragment = if self.options.colon_notation {
            self.colon_fragment(&rendered)
        } else if self.options.verbose {
            format!("{} {}", rendered, self.long_label(value, unit))
        } else {
            format!("{}{}", rendered, self.labels.label(unit).short)
        };
        self.fragments.push(fragment);
    }

    /// A zero-valued column is dropped, except where colon notation needs
    /// it as a placeholder: after the first emitted column every zero
    /// keeps the chain aligned, and the minutes column always prints.
    fn should_skip(&self, value: f64, unit: Unit) -> bool {
        value == 0.0
            && (self.fragments.is_empty() || !self.options.colon_notation)
            && !(self.options.colon_notation && unit == Unit::Minutes)
    }

    /// `:`-joined, zero-padded column. The first column pads to one digit,
    /// later ones to two; a decimal fraction does not count toward the
    /// pad width.
    fn colon_fragment(&self, rendered: &str) -> String {
        let whole_width = rendered.find('.').unwrap_or(rendered.len());
        let (prefix, min_width): (&str, usize) = if self.fragments.is_empty() {
            ("", 1)
        } else {
            (":", 2)
        };
        let padding = "0".repeat(min_width.saturating_sub(whole_width));
        format!("{prefix}{padding}{rendered}")
    }

    /// Long unit label, pluralized when the value is not one. Only the
    /// English table inflects.
    fn long_label(&self, value: f64, unit: Unit) -> String {
        let long = self.labels.label(unit).long;
        if value != 1.0 && self.options.language == Language::En {
            format!("{long}s")
        } else {
            long.to_string()
        }
    }

    fn into_fragments(self) -> Vec<String> {
        self.fragments
    }
}

/// Round to `digits` decimal places, half away from zero.
fn round_decimals(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Fixed-point rendering of an already-rounded value.
fn fixed(value: f64, digits: u32) -> String {
    format!("{:.1$}", value, digits as usize)
}

/// Integer rendering of a whole-valued column.
fn whole(value: f64) -> String {
    format!("{}", value as i64)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
