// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and parsing.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse the hour of a 12-hour clock string such as "9:00 am" or "6pm"
/// into 24-hour form.
///
/// The hour is the leading integer before any `:`. A `pm` marker anywhere
/// in the string (any case) moves hours other than 12 into the afternoon;
/// without one the time is read as am, so 12 becomes 0. The hour itself
/// is not range-checked. Returns `None` when there is no leading integer.
pub fn parse_clock_hour(time: &str) -> Option<u32> {
    let head = time.trim().split(':').next().unwrap_or_default();
    let digits: String = head.chars().take_while(|c| c.is_ascii_digit()).collect();
    let hour: u32 = digits.parse().ok()?;
    let is_pm = time.to_ascii_lowercase().contains("pm");

    Some(match (is_pm, hour) {
        (true, 12) => 12,
        (true, h) => h.saturating_add(12),
        (false, 12) => 0,
        (false, h) => h,
    })
}
