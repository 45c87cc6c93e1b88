// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk processing service.
//!
//! Handles the completion workflow:
//! 1. Validate the walk
//! 2. Compute walk XP
//! 3. Under the dog's store lock: apply the walk, unlock achievements,
//!    add their bonus XP and record the walk

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use crate::db::{DogStore, WalkWrite};
use crate::error::{AppError, Result};
use crate::models::{Dog, WalkActivity, WalkRecord};
use crate::services::experience::{
    calculate_achievement_bonus, check_achievements, xp_for_activity,
};
use crate::time_utils::format_utc_rfc3339;

/// Applies completed walks to dogs held in a [`DogStore`].
pub struct WalkProcessor<S> {
    store: S,
}

impl<S: DogStore> WalkProcessor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a completed walk to a dog.
    ///
    /// Args:
    /// - dog_id: dog to credit
    /// - walk_id: caller-assigned ID; replaying the same ID is a no-op
    /// - walk: the walk itself
    pub fn complete_walk(
        &self,
        dog_id: &str,
        walk_id: &str,
        walk: &WalkActivity,
    ) -> Result<WalkOutcome> {
        tracing::info!(dog_id, walk_id, activity = %walk.activity_type, "Processing walk");

        // 1. Validate before touching any state
        validate_walk(walk)?;

        // 2. Walk XP depends only on the walk
        let xp_gained = xp_for_activity(walk);

        // 3. Everything that reads the dog runs on the stored state
        let write = self.store.process_walk_atomic(dog_id, walk_id, |dog| {
            apply_walk_to_dog(dog, walk_id, walk, xp_gained)
        })?;

        let outcome = match write {
            WalkWrite::Applied(outcome) => outcome,
            WalkWrite::Duplicate(dog) => {
                tracing::debug!(dog_id, walk_id, "Walk already processed (idempotent skip)");
                return Ok(WalkOutcome::duplicate(walk_id, &dog));
            }
        };

        if outcome.leveled_up() {
            tracing::info!(
                dog_id,
                level_before = outcome.level_before,
                level_after = outcome.level_after,
                "Level up"
            );
        }
        tracing::info!(
            dog_id,
            walk_id,
            xp_gained,
            achievement_bonus_xp = outcome.achievement_bonus_xp,
            achievements = ?outcome.new_achievements,
            total_xp = outcome.total_xp,
            "Walk processed"
        );

        Ok(outcome)
    }

    /// Record that a dog joined an event and unlock any resulting achievements.
    ///
    /// Returns the newly unlocked achievement IDs.
    pub fn join_event(&self, dog_id: &str, event_id: u64) -> Result<Vec<String>> {
        let (unlocked, events_joined) = self
            .store
            .update_dog(dog_id, |dog| {
                dog.experience.events_joined = dog.experience.events_joined.saturating_add(1);
                let unlocked = unlock_achievements(dog, None);
                (unlocked, dog.experience.events_joined)
            })?
            .ok_or_else(|| not_found(dog_id))?;

        tracing::info!(
            dog_id,
            event_id,
            events_joined,
            achievements = ?unlocked,
            "Joined event"
        );

        Ok(unlocked)
    }

    /// Wipe a dog's experience progress. Irreversible.
    pub fn reset_experience(&self, dog_id: &str) -> Result<Dog> {
        let dog = self
            .store
            .update_dog(dog_id, |dog| {
                dog.experience = dog.experience.reset();
                dog.clone()
            })?
            .ok_or_else(|| not_found(dog_id))?;
        tracing::warn!(dog_id, "Experience reset");
        Ok(dog)
    }
}

fn not_found(dog_id: &str) -> AppError {
    AppError::NotFound(format!("Dog {}", dog_id))
}

/// Unlock newly earned achievements on `dog` and add their bonus XP.
///
/// Returns the unlocked IDs in catalog order.
fn unlock_achievements(dog: &mut Dog, walk: Option<&WalkActivity>) -> Vec<String> {
    let unlocked: Vec<String> = check_achievements(dog, walk)
        .into_iter()
        .map(String::from)
        .collect();
    dog.experience.add_xp(u64::from(calculate_achievement_bonus(&unlocked)));
    dog.experience.achievements.extend(unlocked.iter().cloned());
    unlocked
}

fn apply_walk_to_dog(
    dog: &mut Dog,
    walk_id: &str,
    walk: &WalkActivity,
    xp_gained: i64,
) -> (WalkRecord, WalkOutcome) {
    let level_before = dog.level();
    dog.experience = dog.experience.apply_walk(walk, xp_gained);

    // Achievements are checked against the post-walk state
    let unlocked = unlock_achievements(dog, Some(walk));
    let achievement_bonus_xp = calculate_achievement_bonus(&unlocked);

    let record = WalkRecord {
        walk_id: walk_id.to_string(),
        dog_id: dog.id().to_string(),
        walk: walk.clone(),
        xp_gained,
        achievements_unlocked: unlocked.clone(),
        achievement_bonus_xp,
        completed_at: format_utc_rfc3339(chrono::Utc::now()),
    };
    let outcome = WalkOutcome {
        walk_id: walk_id.to_string(),
        duplicate: false,
        xp_gained,
        achievement_bonus_xp,
        new_achievements: unlocked,
        level_before,
        level_after: dog.level(),
        total_xp: dog.experience.total_xp,
    };

    (record, outcome)
}

/// Result of processing a walk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct WalkOutcome {
    pub walk_id: String,
    /// The walk ID was seen before; nothing changed
    pub duplicate: bool,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub xp_gained: i64,
    pub achievement_bonus_xp: u32,
    pub new_achievements: Vec<String>,
    pub level_before: u32,
    pub level_after: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_xp: u64,
}

impl WalkOutcome {
    fn duplicate(walk_id: &str, dog: &Dog) -> Self {
        Self {
            walk_id: walk_id.to_string(),
            duplicate: true,
            xp_gained: 0,
            achievement_bonus_xp: 0,
            new_achievements: Vec::new(),
            level_before: dog.level(),
            level_after: dog.level(),
            total_xp: dog.experience.total_xp,
        }
    }

    pub fn leveled_up(&self) -> bool {
        self.level_after > self.level_before
    }
}

fn validate_walk(walk: &WalkActivity) -> Result<()> {
    if !walk.duration_minutes.is_finite() || !walk.distance_km.is_finite() {
        return Err(AppError::BadRequest(
            "Walk duration and distance must be finite numbers".to_string(),
        ));
    }
    walk.validate()?;
    Ok(())
}
