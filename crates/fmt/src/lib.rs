// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! humanspan: human-readable formatting of millisecond durations

pub mod format;
pub mod language;
pub mod options;

pub use format::{format, format_duration, FormatError};
pub use language::{Language, Unit, UnitLabel, UnitLabels};
pub use options::FormatOptions;
