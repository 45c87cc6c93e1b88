// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Experience engine: walk XP, level thresholds and achievement unlocks.
//!
//! Everything here is a pure function of its inputs plus the static
//! achievement catalog.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::achievement::{get_achievement_by_id, Criterion, ACHIEVEMENTS};
use crate::models::{ActivityType, BonusFlag, Dog, WalkActivity};

/// XP earned per minute walked, before the difficulty multiplier.
pub const BASE_XP_PER_MINUTE: f64 = 10.0;
/// XP earned per km, added after the difficulty multiplier.
pub const DISTANCE_BONUS_XP: f64 = 5.0;
pub const MAX_LEVEL: u32 = 50;
/// Levels that get milestone styling.
pub const MILESTONE_LEVELS: [u32; 10] = [5, 10, 15, 20, 25, 30, 35, 40, 45, 50];

/// XP for a single walk.
///
/// `round(duration * 10 * multiplier + distance * 5 + bonuses)`, rounding
/// halves up. Each bonus flag counts once however often it is listed.
/// Inputs are not validated; zero or negative values give proportionally
/// small (possibly negative) results.
pub fn calculate_xp_for_walk<'a>(
    duration_minutes: f64,
    distance_km: f64,
    activity_type: ActivityType,
    bonus_flags: impl IntoIterator<Item = &'a BonusFlag>,
) -> i64 {
    let base_xp = duration_minutes * BASE_XP_PER_MINUTE;
    let distance_bonus = distance_km * DISTANCE_BONUS_XP;

    let mut seen: Vec<BonusFlag> = Vec::new();
    let mut bonus_xp = 0.0;
    for flag in bonus_flags {
        if !seen.contains(flag) {
            seen.push(*flag);
            bonus_xp += f64::from(flag.xp());
        }
    }

    round_half_up(base_xp * activity_type.difficulty_multiplier() + distance_bonus + bonus_xp)
}

/// XP for a walk described by a [`WalkActivity`].
pub fn xp_for_activity(walk: &WalkActivity) -> i64 {
    calculate_xp_for_walk(
        walk.duration_minutes,
        walk.distance_km,
        walk.activity_type,
        &walk.bonus_flags,
    )
}

/// Bonus XP for a flag given by its string id; unknown ids are worth 0.
pub fn bonus_xp_for(id: &str) -> u32 {
    id.parse::<BonusFlag>().map(BonusFlag::xp).unwrap_or(0)
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Cumulative XP needed to reach `level`: `50 * (level - 1) * (level + 2)`.
fn xp_to_reach(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }
    let level = u64::from(level);
    50 * (level - 1) * (level + 2)
}

/// Level for a cumulative XP total, in `1..=MAX_LEVEL`.
///
/// Level 1 covers `[0, 200)`, level 2 `[200, 500)`, level 3 `[500, 900)`,
/// and so on.
pub fn calculate_level_from_xp(total_xp: u64) -> u32 {
    (2..=MAX_LEVEL)
        .find(|&level| total_xp < xp_to_reach(level))
        .map(|level| level - 1)
        .unwrap_or(MAX_LEVEL)
}

/// Cumulative XP needed to reach `current_level + 1`.
pub fn calculate_xp_for_next_level(current_level: u32) -> u64 {
    xp_to_reach(current_level.saturating_add(1))
}

/// Cumulative XP at which `current_level` starts (0 for level 1 and below).
pub fn calculate_xp_for_current_level(current_level: u32) -> u64 {
    xp_to_reach(current_level)
}

/// Progress within the current level, for XP bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub level: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_xp: u64,
    /// XP where the current level started
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub level_start_xp: u64,
    /// XP where the next level starts
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub next_level_xp: u64,
    /// XP earned since the level started
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub progress_xp: u64,
    /// XP span of the current level
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub level_span_xp: u64,
    /// XP still needed for the next level (0 at the cap)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub xp_remaining: u64,
    /// 0.0 to 100.0
    pub percent: f64,
    pub is_max_level: bool,
    pub is_milestone: bool,
}

pub fn level_progress(total_xp: u64) -> LevelProgress {
    let level = calculate_level_from_xp(total_xp);
    let level_start_xp = calculate_xp_for_current_level(level);
    let next_level_xp = calculate_xp_for_next_level(level);
    let progress_xp = total_xp.saturating_sub(level_start_xp);
    let level_span_xp = next_level_xp - level_start_xp;
    let percent = (progress_xp as f64 / level_span_xp as f64 * 100.0).clamp(0.0, 100.0);

    LevelProgress {
        level,
        total_xp,
        level_start_xp,
        next_level_xp,
        progress_xp,
        level_span_xp,
        xp_remaining: next_level_xp.saturating_sub(total_xp),
        percent,
        is_max_level: level >= MAX_LEVEL,
        is_milestone: MILESTONE_LEVELS.contains(&level),
    }
}

/// Achievement ids newly earned by `dog`, in catalog order.
///
/// Ids the dog already holds are never returned. An achievement is earned
/// when any one of its criteria holds. Walk-based criteria are false when
/// `walk` is `None`.
pub fn check_achievements(dog: &Dog, walk: Option<&WalkActivity>) -> Vec<&'static str> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| !dog.experience.has_achievement(a.id))
        .filter(|a| a.criteria.iter().any(|c| criterion_met(c, dog, walk)))
        .map(|a| a.id)
        .collect()
}

fn criterion_met(criterion: &Criterion, dog: &Dog, walk: Option<&WalkActivity>) -> bool {
    let exp = &dog.experience;
    match *criterion {
        Criterion::WalksCompleted(n) => exp.walks_completed >= n,
        Criterion::Level(n) => dog.level() >= n,
        Criterion::HasPhoto => dog.profile.has_photo(),
        Criterion::ProfileCreated => dog.profile.is_created(),
        Criterion::EventsJoined(n) => exp.events_joined >= n,
        Criterion::TrainingWalks(n) => exp.training_walks >= n,
        Criterion::UniqueLocations(n) => exp.locations_visited.len() >= n as usize,
        Criterion::WalkStreak(n) => exp.walk_streak >= n,
        Criterion::WalkBefore(hour) => walk
            .and_then(WalkActivity::start_hour)
            .is_some_and(|h| h < hour),
        Criterion::WalkAfter(hour) => walk
            .and_then(WalkActivity::start_hour)
            .is_some_and(|h| h >= hour),
        Criterion::WalkDuration(minutes) => walk.is_some_and(|w| w.duration_minutes >= minutes),
        Criterion::WalkDistance(km) => walk.is_some_and(|w| w.distance_km >= km),
        Criterion::ActivityType(kind) => walk.is_some_and(|w| w.activity_type == kind),
        Criterion::Weather(weather) => walk.is_some_and(|w| w.weather == Some(weather)),
    }
}

/// Sum of catalog XP bonuses; unknown ids contribute 0.
pub fn calculate_achievement_bonus<S: AsRef<str>>(achievement_ids: &[S]) -> u32 {
    achievement_ids
        .iter()
        .filter_map(|id| get_achievement_by_id(id.as_ref()))
        .map(|a| a.xp_bonus)
        .sum()
}
