// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Check-in history: store aggregates and the history page summary.

use chrono::{DateTime, NaiveDate, Utc};
use walkie_walkie::db::{DogStore, MemoryStore};
use walkie_walkie::models::CheckIn;
use walkie_walkie::services::summarize_history;

fn check_in(id: &str, place: &str, date: &str, distance: Option<f64>) -> CheckIn {
    CheckIn {
        id: id.to_string(),
        place_id: place.to_string(),
        place_name: format!("Place {}", place),
        date: DateTime::parse_from_rfc3339(date)
            .unwrap()
            .with_timezone(&Utc),
        distance_km: distance,
        difficulty: Some("easy".to_string()),
    }
}

fn june_15() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[test]
fn test_summary_sorts_newest_first() {
    let check_ins = vec![
        check_in("a", "albert-park", "2024-05-02T09:00:00Z", Some(1.0)),
        check_in("b", "mission-bay", "2024-06-10T09:00:00Z", Some(5.0)),
        check_in("c", "albert-park", "2024-06-01T09:00:00Z", None),
    ];

    let summary = summarize_history(&check_ins, june_15());

    let order: Vec<&str> = summary.check_ins.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(order, vec!["b", "c", "a"]);
    assert_eq!(summary.total_walks, 3);
    assert_eq!(summary.unique_places, 2);
    assert_eq!(summary.this_month, 2);
    assert_eq!(summary.total_distance_km, 6.0);
}

#[test]
fn test_summary_rounds_distance() {
    let check_ins = vec![
        check_in("a", "x", "2024-06-01T09:00:00Z", Some(1.04)),
        check_in("b", "y", "2024-06-02T09:00:00Z", Some(2.03)),
    ];
    let summary = summarize_history(&check_ins, june_15());
    assert_eq!(summary.total_distance_km, 3.1);
}

#[test]
fn test_summary_this_month_checks_year() {
    let check_ins = vec![check_in("a", "x", "2023-06-20T09:00:00Z", None)];
    let summary = summarize_history(&check_ins, june_15());
    assert_eq!(summary.this_month, 0);
    assert_eq!(summary.total_walks, 1);
}

#[test]
fn test_empty_history() {
    let summary = summarize_history(&[], june_15());
    assert!(summary.check_ins.is_empty());
    assert_eq!(summary.total_walks, 0);
    assert_eq!(summary.unique_places, 0);
    assert_eq!(summary.total_distance_km, 0.0);
}

#[test]
fn test_store_check_ins_are_idempotent() {
    let store = MemoryStore::new();
    let first = check_in("c1", "albert-park", "2024-06-01T09:00:00Z", Some(2.0));
    let second = check_in("c2", "mission-bay", "2024-06-03T09:00:00Z", Some(4.5));

    assert!(store.record_check_in(&first).unwrap());
    assert!(store.record_check_in(&second).unwrap());
    assert!(!store.record_check_in(&first).unwrap(), "replay should be skipped");

    let stats = store.get_walk_stats().unwrap();
    assert_eq!(stats.total_walks, 2);
    assert_eq!(stats.total_distance_km, 6.5);
    assert_eq!(stats.unique_places(), 2);
    assert_eq!(stats.walks_in_month(2024, 6), 2);
    assert!(!stats.updated_at.is_empty());

    let stored = store.get_check_ins().unwrap();
    assert_eq!(stored.len(), 2);

    // Store contents feed straight into the summary
    let summary = summarize_history(&stored, june_15());
    assert_eq!(summary.check_ins[0].id, "c2");
    assert_eq!(summary.total_walks as u32, stats.total_walks);
}
