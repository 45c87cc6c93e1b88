// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walking history aggregates.
//!
//! Updated incrementally as check-ins arrive so history pages don't need
//! to rescan every check-in.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::CheckIn;
use crate::time_utils::format_utc_rfc3339;

/// Pre-computed check-in statistics for an owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkStats {
    // ─── Place Stats ─────────────────────────────────────────────
    /// Visit count per place ID
    #[serde(default)]
    pub places: HashMap<String, u32>,
    /// First visit per place ID (RFC 3339)
    #[serde(default)]
    pub place_first_visit: HashMap<String, String>,
    /// Most recent visit per place ID (RFC 3339)
    #[serde(default)]
    pub place_last_visit: HashMap<String, String>,

    // ─── Totals ──────────────────────────────────────────────────
    #[serde(default)]
    pub total_walks: u32,
    /// Sum of known distances (km)
    #[serde(default)]
    pub total_distance_km: f64,

    // ─── Time Series ─────────────────────────────────────────────
    /// Walk count per month ("YYYY-MM")
    #[serde(default)]
    pub walks_by_month: HashMap<String, u32>,
    /// Walk count per year ("YYYY")
    #[serde(default)]
    pub walks_by_year: HashMap<String, u32>,

    // ─── Idempotency ─────────────────────────────────────────────
    #[serde(default)]
    pub processed_check_in_ids: HashSet<String>,

    /// Last update timestamp (RFC 3339)
    #[serde(default)]
    pub updated_at: String,
}

impl WalkStats {
    /// Fold a check-in into the aggregate.
    ///
    /// Returns `false` without changing anything if the check-in was
    /// already counted.
    pub fn update_from_check_in(&mut self, check_in: &CheckIn, now: &str) -> bool {
        if self.processed_check_in_ids.contains(&check_in.id) {
            return false;
        }

        self.processed_check_in_ids.insert(check_in.id.clone());
        self.updated_at = now.to_string();

        let visited_at = format_utc_rfc3339(check_in.date);
        *self.places.entry(check_in.place_id.clone()).or_insert(0) += 1;

        let first = self
            .place_first_visit
            .entry(check_in.place_id.clone())
            .or_insert_with(|| visited_at.clone());
        // RFC 3339 UTC strings with a Z suffix sort chronologically
        if visited_at < *first {
            *first = visited_at.clone();
        }
        let last = self
            .place_last_visit
            .entry(check_in.place_id.clone())
            .or_insert_with(|| visited_at.clone());
        if visited_at > *last {
            *last = visited_at;
        }

        self.total_walks += 1;
        if let Some(distance) = check_in.distance_km.filter(|d| d.is_finite()) {
            self.total_distance_km += distance;
        }

        let date = check_in.date;
        *self
            .walks_by_month
            .entry(format!("{:04}-{:02}", date.year(), date.month()))
            .or_insert(0) += 1;
        *self
            .walks_by_year
            .entry(format!("{:04}", date.year()))
            .or_insert(0) += 1;

        true
    }

    pub fn unique_places(&self) -> usize {
        self.places.len()
    }

    /// Walks recorded in the given calendar month.
    pub fn walks_in_month(&self, year: i32, month: u32) -> u32 {
        self.walks_by_month
            .get(&format!("{:04}-{:02}", year, month))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn make_check_in(id: &str, place: &str, date: &str, distance: Option<f64>) -> CheckIn {
        CheckIn {
            id: id.to_string(),
            place_id: place.to_string(),
            place_name: format!("Place {}", place),
            date: DateTime::parse_from_rfc3339(date)
                .unwrap()
                .with_timezone(&Utc),
            distance_km: distance,
            difficulty: None,
        }
    }

    #[test]
    fn test_update_from_check_in_basic() {
        let mut stats = WalkStats::default();
        let check_in = make_check_in("c1", "albert-park", "2024-01-15T10:00:00Z", Some(2.5));

        let processed = stats.update_from_check_in(&check_in, "2024-01-15T12:00:00Z");

        assert!(processed);
        assert_eq!(stats.total_walks, 1);
        assert_eq!(stats.total_distance_km, 2.5);
        assert_eq!(stats.places.get("albert-park"), Some(&1));
        assert_eq!(stats.walks_in_month(2024, 1), 1);
        assert_eq!(stats.walks_by_year.get("2024"), Some(&1));
    }

    #[test]
    fn test_idempotency_skips_duplicate() {
        let mut stats = WalkStats::default();
        let check_in = make_check_in("c1", "albert-park", "2024-01-15T10:00:00Z", Some(2.0));

        stats.update_from_check_in(&check_in, "now");
        let processed_again = stats.update_from_check_in(&check_in, "later");

        assert!(!processed_again);
        assert_eq!(stats.total_walks, 1);
        assert_eq!(stats.updated_at, "now");
    }

    #[test]
    fn test_first_last_visit_out_of_order() {
        let mut stats = WalkStats::default();
        let later = make_check_in("c2", "beach", "2024-01-20T10:00:00Z", None);
        let earlier = make_check_in("c1", "beach", "2024-01-10T10:00:00Z", None);

        stats.update_from_check_in(&later, "now");
        stats.update_from_check_in(&earlier, "now");

        assert_eq!(
            stats.place_first_visit.get("beach"),
            Some(&"2024-01-10T10:00:00Z".to_string())
        );
        assert_eq!(
            stats.place_last_visit.get("beach"),
            Some(&"2024-01-20T10:00:00Z".to_string())
        );
        assert_eq!(stats.unique_places(), 1);
        assert_eq!(stats.total_distance_km, 0.0);
    }
}
