// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Integration tests for the public formatting API.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::time::Duration;

use humanspan::{format, format_duration, FormatError, FormatOptions, Language};

fn fmt_with(ms: f64, options: FormatOptions) -> String {
    format(ms, &options).unwrap()
}

// ============================================================================
// Output Across Scales
// ============================================================================

#[test]
fn scales_from_millis_to_days() {
    let options = FormatOptions::default();
    assert_eq!(format(133.0, &options).unwrap(), "133ms");
    assert_eq!(format(1_337.0, &options).unwrap(), "1.3s");
    assert_eq!(format(513_213.0, &options).unwrap(), "8m 33.2s");
    assert_eq!(format(1_337_000_000.0, &options).unwrap(), "15d 11h 23m 20s");
}

#[test]
fn one_value_across_notations() {
    assert_eq!(fmt_with(95_543.0, FormatOptions::default()), "1m 35.5s");
    assert_eq!(
        fmt_with(
            95_543.0,
            FormatOptions {
                verbose: true,
                ..Default::default()
            }
        ),
        "1 minute 35.5 seconds"
    );
    assert_eq!(
        fmt_with(
            95_543.0,
            FormatOptions {
                compact: true,
                ..Default::default()
            }
        ),
        "~1m"
    );
    assert_eq!(
        fmt_with(
            95_543.0,
            FormatOptions {
                colon_notation: true,
                ..Default::default()
            }
        ),
        "1:35.5"
    );
    assert_eq!(
        fmt_with(
            95_543.0,
            FormatOptions {
                unit_count: Some(2),
                ..Default::default()
            }
        ),
        "~1m 35.5s"
    );
}

#[test]
fn negative_durations_carry_a_sign() {
    assert_eq!(fmt_with(-1_400.0, FormatOptions::default()), "-1.4s");
    assert_eq!(fmt_with(-1_000.0, FormatOptions::default()), "-1s");
}

// ============================================================================
// Options From Configuration
// ============================================================================

#[test]
fn json_options_drive_formatting() {
    let options: FormatOptions = serde_json::from_str(r#"{"compact": true}"#).unwrap();
    assert_eq!(format(1_337.0, &options).unwrap(), "~1s");

    let options: FormatOptions =
        serde_json::from_str(r#"{"verbose": true, "language": "ID"}"#).unwrap();
    assert_eq!(format(2_000.0, &options).unwrap(), "2 detik");
}

#[test]
fn unknown_language_in_config_falls_back_to_english() {
    let options: FormatOptions = serde_json::from_str(r#"{"language": "XX"}"#).unwrap();
    assert_eq!(format(1_000.0, &options).unwrap(), "1s");
    assert_eq!(options.language, Language::En);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn non_finite_counts_are_rejected() {
    assert!(matches!(
        format(f64::NAN, &FormatOptions::default()),
        Err(FormatError::InvalidArgument(_))
    ));
    assert!(matches!(
        format(f64::INFINITY, &FormatOptions::default()),
        Err(FormatError::InvalidArgument(_))
    ));
}

#[test]
fn format_error_is_a_std_error() {
    let error = format(f64::NAN, &FormatOptions::default()).unwrap_err();
    let _: &dyn std::error::Error = &error;
}

// ============================================================================
// Durations And Sharing
// ============================================================================

#[test]
fn durations_format_without_a_result() {
    let options = FormatOptions::default();
    assert_eq!(format_duration(Duration::from_secs(90), &options), "1m 30s");
    assert_eq!(format_duration(Duration::ZERO, &options), "0ms");
}

#[test]
fn durations_support_colon_notation() {
    let options = FormatOptions {
        colon_notation: true,
        ..Default::default()
    };
    assert_eq!(format_duration(Duration::from_millis(95_000), &options), "1:35");
}

#[test]
fn options_shared_across_threads() {
    let options = FormatOptions::default();
    std::thread::scope(|scope| {
        let first = scope.spawn(|| format(1_400.0, &options).unwrap());
        let second = scope.spawn(|| format(67_000.0, &options).unwrap());
        assert_eq!(first.join().unwrap(), "1.4s");
        assert_eq!(second.join().unwrap(), "1m 7s");
    });
}

#[test]
fn repeated_calls_are_deterministic() {
    let options = FormatOptions {
        verbose: true,
        seconds_decimal_digits: 2,
        ..Default::default()
    };
    let first = format(95_543.233, &options).unwrap();
    let second = format(95_543.233, &options).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "1 minute 35.54 seconds");
}
