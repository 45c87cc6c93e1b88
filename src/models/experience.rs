// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-dog experience progress.
//!
//! `total_xp` is the only ground truth for progression. The level is
//! never stored; it is recomputed from `total_xp` on every read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::walk::{ActivityType, WalkActivity};
use crate::services::experience::calculate_level_from_xp;

/// Experience progress for a single dog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceState {
    // ─── Progression ─────────────────────────────────────────────
    /// Cumulative XP
    #[serde(default, rename = "totalXP", alias = "totalXp")]
    pub total_xp: u64,
    /// Number of walks applied
    #[serde(default)]
    pub walks_completed: u32,
    /// Unlocked achievement ids
    #[serde(default)]
    pub achievements: BTreeSet<String>,

    // ─── Achievement Counters ────────────────────────────────────
    #[serde(default)]
    pub events_joined: u32,
    #[serde(default)]
    pub training_walks: u32,
    /// Distinct places walked at
    #[serde(default)]
    pub locations_visited: BTreeSet<String>,
    /// Consecutive calendar days with at least one walk
    #[serde(default)]
    pub walk_streak: u32,
    #[serde(default)]
    pub last_walk_date: Option<NaiveDate>,
}

impl ExperienceState {
    pub fn level(&self) -> u32 {
        calculate_level_from_xp(self.total_xp)
    }

    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.contains(id)
    }

    /// Return the state after applying a walk worth `xp` points.
    ///
    /// Negative `xp` (only possible from unvalidated input) never takes
    /// the total below zero.
    pub fn apply_walk(&self, walk: &WalkActivity, xp: i64) -> ExperienceState {
        let mut next = self.clone();
        next.total_xp = self.total_xp.saturating_add(xp.max(0) as u64);
        next.walks_completed = self.walks_completed.saturating_add(1);

        if walk.activity_type == ActivityType::Training {
            next.training_walks = self.training_walks.saturating_add(1);
        }
        if let Some(location) = walk.location.as_deref().filter(|l| !l.is_empty()) {
            next.locations_visited.insert(location.to_string());
        }
        if let Some(date) = walk.started_at.map(|t| t.date()) {
            next.record_walk_day(date);
        }

        next
    }

    /// Add XP from an external source (achievement bonuses).
    pub fn add_xp(&mut self, xp: u64) {
        self.total_xp = self.total_xp.saturating_add(xp);
    }

    /// Clear all progress. Irreversible.
    pub fn reset(&self) -> ExperienceState {
        ExperienceState::default()
    }

    fn record_walk_day(&mut self, date: NaiveDate) {
        self.walk_streak = match self.last_walk_date {
            Some(last) if last == date => self.walk_streak.max(1),
            Some(last) if last.succ_opt() == Some(date) => self.walk_streak.saturating_add(1),
            // Walks recorded out of order don't break the streak.
            Some(last) if date < last => self.walk_streak,
            _ => 1,
        };
        self.last_walk_date = Some(match self.last_walk_date {
            Some(last) if last > date => last,
            _ => date,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn walk_on(date: &str) -> WalkActivity {
        let start = NaiveDateTime::parse_from_str(&format!("{date} 08:00:00"), "%Y-%m-%d %H:%M:%S")
            .unwrap();
        WalkActivity::new(30.0, 2.0, ActivityType::Casual).started_at(start)
    }

    #[test]
    fn test_apply_walk_accumulates() {
        let state = ExperienceState::default();
        let walk = WalkActivity::new(30.0, 2.0, ActivityType::Training).at_location("albert-park");

        let next = state.apply_walk(&walk, 310);

        assert_eq!(next.total_xp, 310);
        assert_eq!(next.walks_completed, 1);
        assert_eq!(next.level(), 2);
        assert_eq!(next.training_walks, 1);
        assert!(next.locations_visited.contains("albert-park"));
        // Input state is untouched
        assert_eq!(state.total_xp, 0);
    }

    #[test]
    fn test_negative_xp_never_reduces_total() {
        let state = ExperienceState {
            total_xp: 100,
            ..Default::default()
        };
        let walk = WalkActivity::new(-5.0, 0.0, ActivityType::Casual);
        let next = state.apply_walk(&walk, -50);
        assert_eq!(next.total_xp, 100);
        assert_eq!(next.walks_completed, 1);
    }

    #[test]
    fn test_streak_tracking() {
        let mut state = ExperienceState::default();
        for date in ["2024-03-01", "2024-03-02", "2024-03-02", "2024-03-03"] {
            state = state.apply_walk(&walk_on(date), 10);
        }
        assert_eq!(state.walk_streak, 3);

        state = state.apply_walk(&walk_on("2024-03-05"), 10);
        assert_eq!(state.walk_streak, 1);
        assert_eq!(state.last_walk_date, NaiveDate::from_ymd_opt(2024, 3, 5));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = ExperienceState::default().apply_walk(&walk_on("2024-03-01"), 5000);
        state.achievements.insert("FIRST_WALK".to_string());
        state.events_joined = 3;

        let reset = state.reset();

        assert_eq!(reset.total_xp, 0);
        assert_eq!(reset.level(), 1);
        assert_eq!(reset.walks_completed, 0);
        assert!(reset.achievements.is_empty());
        assert_eq!(reset, ExperienceState::default());
    }
}
