// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    english    = { "EN", Language::En },
    indonesian = { "ID", Language::Id },
    lowercase  = { "en", Language::En },
    mixed_case = { "Id", Language::En },
    unknown    = { "FR", Language::En },
    empty      = { "", Language::En },
)]
fn from_code(code: &str, expected: Language) {
    assert_eq!(Language::from_code(code), expected);
}

#[test]
fn code_round_trips() {
    assert_eq!(Language::from_code(Language::En.code()), Language::En);
    assert_eq!(Language::from_code(Language::Id.code()), Language::Id);
}

#[test]
fn default_language_is_english() {
    assert_eq!(Language::default(), Language::En);
}

#[test]
fn display_shows_code() {
    assert_eq!(Language::En.to_string(), "EN");
    assert_eq!(Language::Id.to_string(), "ID");
}

#[test]
fn unit_display_is_lowercase_plural() {
    assert_eq!(Unit::Years.to_string(), "years");
    assert_eq!(Unit::Microseconds.to_string(), "microseconds");
}

#[test]
fn english_labels() {
    let labels = Language::En.labels();
    assert_eq!(labels.label(Unit::Years).short, "y");
    assert_eq!(labels.label(Unit::Seconds).long, "second");
    assert_eq!(labels.label(Unit::Microseconds).short, "µs");
    assert_eq!(labels.label(Unit::Nanoseconds).short, "ns");
}

#[test]
fn indonesian_labels() {
    let labels = Language::Id.labels();
    assert_eq!(labels.label(Unit::Seconds).short, "d");
    assert_eq!(labels.label(Unit::Years).long, "tahun");
    assert_eq!(labels.label(Unit::Milliseconds).short, "md");
    assert_eq!(labels.label(Unit::Microseconds).short, "\u{3bc}dtk");
}

#[test]
fn serde_round_trip() {
    let json = serde_json::to_string(&Language::Id).unwrap();
    assert_eq!(json, "\"ID\"");
    assert_eq!(serde_json::from_str::<Language>(&json).unwrap(), Language::Id);
}

#[test]
fn unknown_code_deserializes_as_english() {
    assert_eq!(serde_json::from_str::<Language>("\"XX\"").unwrap(), Language::En);
}
