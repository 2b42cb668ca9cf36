// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for clock-time formatting and arithmetic.

use chrono::{NaiveTime, TimeDelta};

/// Format a time as `HH:MM` in zero-padded 24-hour notation.
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Subtract a number of minutes from a clock time.
///
/// The result stays on the clock face: subtracting past midnight wraps
/// around rather than rolling to the previous calendar day, matching how
/// the schedule reports Sahur start as a bare `HH:MM` value.
pub fn minus_minutes(time: NaiveTime, minutes: i64) -> NaiveTime {
    let (wrapped, _days) = time.overflowing_sub_signed(TimeDelta::minutes(minutes));
    wrapped
}
