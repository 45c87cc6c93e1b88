// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod achievement;
pub mod check_in;
pub mod dog;
pub mod event;
pub mod experience;
pub mod filter;
pub mod stats;
pub mod walk;

pub use achievement::{Achievement, Category, Criterion, ACHIEVEMENTS};
pub use check_in::CheckIn;
pub use dog::{Dog, DogProfile, DogSize, EnergyLevel, Friendliness};
pub use event::{Event, TimeOfDay};
pub use experience::ExperienceState;
pub use filter::{DistanceFilter, FilterCriteria};
pub use stats::WalkStats;
pub use walk::{ActivityType, BonusFlag, WalkActivity, WalkRecord, Weather};
