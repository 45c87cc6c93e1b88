// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod events;
pub mod experience;
pub mod history;
pub mod matching;
pub mod walk;

pub use events::{EventCatalog, EventError};
pub use experience::{
    calculate_achievement_bonus, calculate_level_from_xp, calculate_xp_for_current_level,
    calculate_xp_for_next_level, calculate_xp_for_walk, check_achievements, level_progress,
    LevelProgress,
};
pub use history::{summarize_history, HistorySummary};
pub use matching::{filter_events, matches_profile, EventTraits};
pub use walk::{WalkOutcome, WalkProcessor};
