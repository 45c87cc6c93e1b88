// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static achievement catalog.

use serde::Serialize;

use crate::models::walk::{ActivityType, Weather};

/// Achievement grouping shown on the badge wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Milestone,
    Frequency,
    Level,
    Time,
    Endurance,
    Social,
    Activity,
    Exploration,
    Distance,
    Streak,
    Special,
    Profile,
}

/// A single unlock condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    /// Walks completed >= n
    WalksCompleted(u32),
    /// Derived level >= n
    Level(u32),
    HasPhoto,
    ProfileCreated,
    /// Walk started before this hour (0-23)
    WalkBefore(u32),
    /// Walk started at or after this hour (0-23)
    WalkAfter(u32),
    /// Walk lasted >= n minutes
    WalkDuration(f64),
    /// Walk covered >= n km
    WalkDistance(f64),
    ActivityType(ActivityType),
    EventsJoined(u32),
    TrainingWalks(u32),
    UniqueLocations(u32),
    WalkStreak(u32),
    Weather(Weather),
}

/// Catalog entry. An achievement unlocks when any one of its criteria holds.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub category: Category,
    pub criteria: &'static [Criterion],
    /// XP awarded once on unlock
    pub xp_bonus: u32,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    // ─── Beginner ────────────────────────────────────────────────
    Achievement {
        id: "FIRST_WALK",
        name: "First Steps",
        description: "Completed your very first walk",
        emoji: "👶",
        category: Category::Milestone,
        criteria: &[Criterion::WalksCompleted(1)],
        xp_bonus: 50,
    },
    Achievement {
        id: "EARLY_ADOPTER",
        name: "Early Adopter",
        description: "Joined the walkieWalkie community",
        emoji: "🌟",
        category: Category::Milestone,
        criteria: &[Criterion::ProfileCreated],
        xp_bonus: 25,
    },
    // ─── Frequency ───────────────────────────────────────────────
    Achievement {
        id: "WEEKEND_WARRIOR",
        name: "Weekend Warrior",
        description: "Completed 5 walks",
        emoji: "⚡",
        category: Category::Frequency,
        criteria: &[Criterion::WalksCompleted(5)],
        xp_bonus: 75,
    },
    Achievement {
        id: "DEDICATED_WALKER",
        name: "Dedicated Walker",
        description: "Completed 25 walks",
        emoji: "🏃",
        category: Category::Frequency,
        criteria: &[Criterion::WalksCompleted(25)],
        xp_bonus: 150,
    },
    Achievement {
        id: "WALKING_LEGEND",
        name: "Walking Legend",
        description: "Completed 100 walks",
        emoji: "👑",
        category: Category::Frequency,
        criteria: &[Criterion::WalksCompleted(100)],
        xp_bonus: 500,
    },
    // ─── Level ───────────────────────────────────────────────────
    Achievement {
        id: "LEVEL_UP_ROOKIE",
        name: "Level Up Rookie",
        description: "Reached level 5",
        emoji: "🥉",
        category: Category::Level,
        criteria: &[Criterion::Level(5)],
        xp_bonus: 100,
    },
    Achievement {
        id: "LEVEL_UP_VETERAN",
        name: "Veteran Walker",
        description: "Reached level 10",
        emoji: "🥈",
        category: Category::Level,
        criteria: &[Criterion::Level(10)],
        xp_bonus: 200,
    },
    Achievement {
        id: "LEVEL_UP_MASTER",
        name: "Master Walker",
        description: "Reached level 20",
        emoji: "🥇",
        category: Category::Level,
        criteria: &[Criterion::Level(20)],
        xp_bonus: 500,
    },
    // ─── Time ────────────────────────────────────────────────────
    Achievement {
        id: "EARLY_BIRD",
        name: "Early Bird",
        description: "Completed a walk before 7 AM",
        emoji: "🌅",
        category: Category::Time,
        criteria: &[Criterion::WalkBefore(7)],
        xp_bonus: 25,
    },
    Achievement {
        id: "NIGHT_OWL",
        name: "Night Owl",
        description: "Completed a walk after 9 PM",
        emoji: "🌙",
        category: Category::Time,
        criteria: &[Criterion::WalkAfter(21)],
        xp_bonus: 25,
    },
    Achievement {
        id: "MARATHON_WALKER",
        name: "Marathon Walker",
        description: "Walked for over 2 hours in one session",
        emoji: "🏃‍♂️",
        category: Category::Endurance,
        criteria: &[Criterion::WalkDuration(120.0)],
        xp_bonus: 100,
    },
    // ─── Social ──────────────────────────────────────────────────
    Achievement {
        id: "SOCIAL_BUTTERFLY",
        name: "Social Butterfly",
        description: "Participated in a group walk",
        emoji: "🦋",
        category: Category::Social,
        criteria: &[Criterion::ActivityType(ActivityType::Playgroup)],
        xp_bonus: 30,
    },
    Achievement {
        id: "EVENT_ENTHUSIAST",
        name: "Event Enthusiast",
        description: "Joined 5 walking events",
        emoji: "🎉",
        category: Category::Social,
        criteria: &[Criterion::EventsJoined(5)],
        xp_bonus: 75,
    },
    // ─── Activity ────────────────────────────────────────────────
    Achievement {
        id: "TRAINING_SPECIALIST",
        name: "Training Specialist",
        description: "Completed 10 training sessions",
        emoji: "🎯",
        category: Category::Activity,
        criteria: &[Criterion::TrainingWalks(10)],
        xp_bonus: 100,
    },
    Achievement {
        id: "EXPLORER",
        name: "Explorer",
        description: "Walked in 5 different locations",
        emoji: "🗺️",
        category: Category::Exploration,
        criteria: &[Criterion::UniqueLocations(5)],
        xp_bonus: 125,
    },
    Achievement {
        id: "SPEED_DEMON",
        name: "Speed Demon",
        description: "Completed a 5km+ walk",
        emoji: "💨",
        category: Category::Distance,
        criteria: &[Criterion::WalkDistance(5.0)],
        xp_bonus: 75,
    },
    // ─── Special ─────────────────────────────────────────────────
    Achievement {
        id: "PERFECT_WEEK",
        name: "Perfect Week",
        description: "Walked 7 days in a row",
        emoji: "🔥",
        category: Category::Streak,
        criteria: &[Criterion::WalkStreak(7)],
        xp_bonus: 200,
    },
    Achievement {
        id: "WEATHER_WARRIOR",
        name: "Weather Warrior",
        description: "Walked in challenging weather",
        emoji: "⛈️",
        category: Category::Special,
        criteria: &[Criterion::Weather(Weather::Challenging)],
        xp_bonus: 50,
    },
    Achievement {
        id: "PHOTO_PERFECTIONIST",
        name: "Photo Perfectionist",
        description: "Added a profile photo",
        emoji: "📸",
        category: Category::Profile,
        criteria: &[Criterion::HasPhoto],
        xp_bonus: 25,
    },
];

pub fn get_achievement_by_id(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let mut seen = HashSet::new();
        for achievement in ACHIEVEMENTS {
            assert!(seen.insert(achievement.id), "Duplicate id: {}", achievement.id);
            assert!(!achievement.criteria.is_empty(), "{} has no criteria", achievement.id);
        }
        assert_eq!(seen.len(), 19);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(get_achievement_by_id("EXPLORER").map(|a| a.xp_bonus), Some(125));
        assert!(get_achievement_by_id("NOPE").is_none());
    }
}
