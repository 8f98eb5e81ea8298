// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit label tables and language selection.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display units, largest to smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Years,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Years => "years",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
            Unit::Milliseconds => "milliseconds",
            Unit::Microseconds => "microseconds",
            Unit::Nanoseconds => "nanoseconds",
        };
        f.write_str(name)
    }
}

/// Short and long display forms of one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabel {
    pub short: &'static str,
    pub long: &'static str,
}

const fn label(short: &'static str, long: &'static str) -> UnitLabel {
    UnitLabel { short, long }
}

/// Per-unit label table for one language. Long forms are singular;
/// pluralization happens at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabels {
    pub years: UnitLabel,
    pub days: UnitLabel,
    pub hours: UnitLabel,
    pub minutes: UnitLabel,
    pub seconds: UnitLabel,
    pub milliseconds: UnitLabel,
    pub microseconds: UnitLabel,
    pub nanoseconds: UnitLabel,
}

impl UnitLabels {
    /// Label pair for `unit`.
    pub fn label(&self, unit: Unit) -> &UnitLabel {
        match unit {
            Unit::Years => &self.years,
            Unit::Days => &self.days,
            Unit::Hours => &self.hours,
            Unit::Minutes => &self.minutes,
            Unit::Seconds => &self.seconds,
            Unit::Milliseconds => &self.milliseconds,
            Unit::Microseconds => &self.microseconds,
            Unit::Nanoseconds => &self.nanoseconds,
        }
    }
}

/// English labels.
pub const EN: UnitLabels = UnitLabels {
    years: label("y", "year"),
    days: label("d", "day"),
    hours: label("h", "hour"),
    minutes: label("m", "minute"),
    seconds: label("s", "second"),
    milliseconds: label("ms", "millisecond"),
    microseconds: label("µs", "microsecond"),
    nanoseconds: label("ns", "nanosecond"),
};

/// Indonesian labels.
pub const ID: UnitLabels = UnitLabels {
    years: label("t", "tahun"),
    days: label("h", "hari"),
    hours: label("j", "jam"),
    minutes: label("m", "menit"),
    seconds: label("d", "detik"),
    milliseconds: label("md", "milidetik"),
    microseconds: label("μdtk", "mikrodetik"),
    nanoseconds: label("nd", "nanodetik"),
};

/// Label language for formatted output.
///
/// Codes match case-sensitively; anything other than `"EN"` or `"ID"`
/// falls back to English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Indonesian.
    Id,
}

impl Language {
    /// Select a language by its code. Unrecognized codes fall back to
    /// English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "EN" => Language::En,
            "ID" => Language::Id,
            _ => {
                tracing::debug!(code = %code, "unrecognized language code, falling back to EN");
                Language::En
            }
        }
    }

    /// The code this language is selected by.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Id => "ID",
        }
    }

    /// The label table for this language.
    pub fn labels(self) -> &'static UnitLabels {
        match self {
            Language::En => &EN,
            Language::Id => &ID,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Language::from_code(&code))
    }
}

#[cfg(test)]
#[path = "language_tests.rs"]
mod tests;
