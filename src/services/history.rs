// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Check-in history summary.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;

use crate::models::CheckIn;

/// Summary shown at the top of the walking history page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    /// Check-ins, newest first
    pub check_ins: Vec<CheckIn>,
    pub total_walks: usize,
    /// Sum of known distances, rounded to one decimal
    pub total_distance_km: f64,
    pub unique_places: usize,
    /// Check-ins in the same calendar month as `today`
    pub this_month: usize,
}

pub fn summarize_history(check_ins: &[CheckIn], today: NaiveDate) -> HistorySummary {
    let mut sorted = check_ins.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let total_distance: f64 = sorted
        .iter()
        .filter_map(|c| c.distance_km)
        .filter(|d| d.is_finite())
        .sum();

    let unique_places = sorted
        .iter()
        .map(|c| c.place_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let this_month = sorted
        .iter()
        .filter(|c| c.date.year() == today.year() && c.date.month() == today.month())
        .count();

    HistorySummary {
        total_walks: sorted.len(),
        total_distance_km: (total_distance * 10.0).round() / 10.0,
        unique_places,
        this_month,
        check_ins: sorted,
    }
}
