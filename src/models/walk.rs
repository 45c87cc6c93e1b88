// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk activity model: the input to the experience engine.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Kind of walk, which sets the XP difficulty multiplier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    #[default]
    Casual,
    Training,
    Playgroup,
    Active,
}

impl ActivityType {
    /// XP multiplier applied to the per-minute base.
    pub fn difficulty_multiplier(self) -> f64 {
        match self {
            ActivityType::Casual => 1.0,
            ActivityType::Training => 1.5,
            ActivityType::Playgroup => 1.2,
            ActivityType::Active => 2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Casual => "casual",
            ActivityType::Training => "training",
            ActivityType::Playgroup => "playgroup",
            ActivityType::Active => "active",
        }
    }

    /// Parse a stored label, falling back to `Casual` for anything unknown.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or(ActivityType::Casual)
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "casual" => Ok(ActivityType::Casual),
            "training" => Ok(ActivityType::Training),
            "playgroup" => Ok(ActivityType::Playgroup),
            "active" => Ok(ActivityType::Active),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Returned when a string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0}")]
pub struct UnknownVariant(pub String);

/// One-off XP bonuses a caller can attach to a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BonusFlag {
    FirstWalk,
    PerfectWeek,
    LongDistance,
    EarlyBird,
    SocialButterfly,
}

impl BonusFlag {
    pub fn xp(self) -> u32 {
        match self {
            BonusFlag::FirstWalk => 50,
            BonusFlag::PerfectWeek => 100,
            BonusFlag::LongDistance => 25,
            BonusFlag::EarlyBird => 15,
            BonusFlag::SocialButterfly => 20,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BonusFlag::FirstWalk => "FIRST_WALK",
            BonusFlag::PerfectWeek => "PERFECT_WEEK",
            BonusFlag::LongDistance => "LONG_DISTANCE",
            BonusFlag::EarlyBird => "EARLY_BIRD",
            BonusFlag::SocialButterfly => "SOCIAL_BUTTERFLY",
        }
    }
}

impl FromStr for BonusFlag {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIRST_WALK" => Ok(BonusFlag::FirstWalk),
            "PERFECT_WEEK" => Ok(BonusFlag::PerfectWeek),
            "LONG_DISTANCE" => Ok(BonusFlag::LongDistance),
            "EARLY_BIRD" => Ok(BonusFlag::EarlyBird),
            "SOCIAL_BUTTERFLY" => Ok(BonusFlag::SocialButterfly),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Weather reported for a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Fair,
    Challenging,
}

/// A completed (or simulated) walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WalkActivity {
    /// Walk length in minutes
    #[validate(range(exclusive_min = 0.0, max = 1440.0))]
    pub duration_minutes: f64,
    /// Distance covered in km
    #[validate(range(min = 0.0, max = 500.0))]
    pub distance_km: f64,
    /// Missing or unknown values read as casual
    #[serde(default, deserialize_with = "lenient_activity_type")]
    pub activity_type: ActivityType,
    /// Unknown flags are dropped
    #[serde(default, deserialize_with = "known_bonus_flags")]
    pub bonus_flags: BTreeSet<BonusFlag>,
    /// Local wall-clock start of the walk
    #[serde(default)]
    pub started_at: Option<NaiveDateTime>,
    /// Place identifier, if the walk happened at a known place
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub weather: Option<Weather>,
}

impl WalkActivity {
    pub fn new(duration_minutes: f64, distance_km: f64, activity_type: ActivityType) -> Self {
        Self {
            duration_minutes,
            distance_km,
            activity_type,
            bonus_flags: BTreeSet::new(),
            started_at: None,
            location: None,
            weather: None,
        }
    }

    pub fn with_bonus(mut self, flag: BonusFlag) -> Self {
        self.bonus_flags.insert(flag);
        self
    }

    pub fn started_at(mut self, started_at: NaiveDateTime) -> Self {
        self.started_at = Some(started_at);
        self
    }

    pub fn at_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn in_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    /// Hour of day (0-23) the walk started, if known.
    pub fn start_hour(&self) -> Option<u32> {
        self.started_at.map(|t| t.hour())
    }
}

fn lenient_activity_type<'de, D>(deserializer: D) -> Result<ActivityType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(ActivityType::parse_lenient).unwrap_or_default())
}

fn known_bonus_flags<'de, D>(deserializer: D) -> Result<BTreeSet<BonusFlag>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .iter()
        .filter_map(|id| match id.parse::<BonusFlag>() {
            Ok(flag) => Some(flag),
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring unknown bonus flag");
                None
            }
        })
        .collect())
}

/// Stored record of a processed walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkRecord {
    /// Caller-assigned walk ID (idempotency key)
    pub walk_id: String,
    pub dog_id: String,
    pub walk: WalkActivity,
    /// XP from the walk itself
    pub xp_gained: i64,
    /// Achievements unlocked by this walk
    #[serde(default)]
    pub achievements_unlocked: Vec<String>,
    /// XP from those achievements
    #[serde(default)]
    pub achievement_bonus_xp: u32,
    /// When the walk was processed (RFC 3339)
    pub completed_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_defaults_to_casual() {
        assert_eq!(ActivityType::parse_lenient("active"), ActivityType::Active);
        assert_eq!(ActivityType::parse_lenient(" Training "), ActivityType::Training);
        assert_eq!(ActivityType::parse_lenient("swimming"), ActivityType::Casual);
        assert_eq!(ActivityType::parse_lenient(""), ActivityType::Casual);
    }

    #[test]
    fn test_bonus_flag_round_trips_through_str() {
        for flag in [
            BonusFlag::FirstWalk,
            BonusFlag::PerfectWeek,
            BonusFlag::LongDistance,
            BonusFlag::EarlyBird,
            BonusFlag::SocialButterfly,
        ] {
            assert_eq!(flag.as_str().parse::<BonusFlag>(), Ok(flag));
        }
        assert!("MOON_WALK".parse::<BonusFlag>().is_err());
    }

    #[test]
    fn test_walk_validation() {
        let walk = WalkActivity::new(30.0, 2.0, ActivityType::Casual);
        assert!(walk.validate().is_ok());

        let zero = WalkActivity::new(0.0, 2.0, ActivityType::Casual);
        assert!(zero.validate().is_err());

        let negative_distance = WalkActivity::new(30.0, -1.0, ActivityType::Casual);
        assert!(negative_distance.validate().is_err());
    }

    #[test]
    fn test_deserialize_from_camel_case() {
        let json = r#"{
            "durationMinutes": 45,
            "distanceKm": 3.5,
            "activityType": "playgroup",
            "bonusFlags": ["FIRST_WALK", "FIRST_WALK"],
            "startedAt": "2024-06-01T06:30:00"
        }"#;
        let walk: WalkActivity = serde_json::from_str(json).unwrap();
        assert_eq!(walk.activity_type, ActivityType::Playgroup);
        assert_eq!(walk.bonus_flags.len(), 1);
        assert_eq!(walk.start_hour(), Some(6));
    }

    #[test]
    fn test_unknown_activity_type_reads_as_casual() {
        let json = r#"{"durationMinutes": 30, "distanceKm": 2, "activityType": "swimming"}"#;
        let walk: WalkActivity = serde_json::from_str(json).unwrap();
        assert_eq!(walk.activity_type, ActivityType::Casual);

        let json = r#"{"durationMinutes": 30, "distanceKm": 2}"#;
        let walk: WalkActivity = serde_json::from_str(json).unwrap();
        assert_eq!(walk.activity_type, ActivityType::Casual);

        let json = r#"{"durationMinutes": 30, "distanceKm": 2, "activityType": "Active"}"#;
        let walk: WalkActivity = serde_json::from_str(json).unwrap();
        assert_eq!(walk.activity_type, ActivityType::Active);
    }

    #[test]
    fn test_unknown_bonus_flags_are_dropped() {
        let json = r#"{
            "durationMinutes": 30,
            "distanceKm": 2,
            "activityType": "casual",
            "bonusFlags": ["MOON_WALK", "EARLY_BIRD"]
        }"#;
        let walk: WalkActivity = serde_json::from_str(json).unwrap();
        assert_eq!(walk.bonus_flags, BTreeSet::from([BonusFlag::EarlyBird]));
        // 30 * 10 + 2 * 5 + 15
        assert_eq!(crate::services::experience::xp_for_activity(&walk), 325);
    }
}
