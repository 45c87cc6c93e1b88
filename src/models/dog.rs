// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dog profile model and the attribute scales shared with event filtering.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::experience::ExperienceState;

/// Dog size. Profiles use capitalized values, filters use lowercase; both parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum DogSize {
    #[serde(rename = "small", alias = "Small")]
    Small,
    #[serde(rename = "medium", alias = "Medium")]
    Medium,
    #[serde(rename = "large", alias = "Large")]
    Large,
}

/// Dog energy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

/// Sociability scale, ordered from least to most social.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Friendliness {
    #[serde(rename = "Not Social")]
    NotSocial,
    Selective,
    #[serde(rename = "Somewhat Friendly")]
    SomewhatFriendly,
    Friendly,
    #[serde(rename = "Very Friendly")]
    VeryFriendly,
}

/// Editable dog profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct DogProfile {
    pub id: String,
    #[serde(default)]
    pub dog_name: String,
    #[serde(default)]
    pub breed: String,
    /// Free text, e.g. "3 years old"
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub size: Option<DogSize>,
    #[serde(default)]
    pub energy: Option<EnergyLevel>,
    #[serde(default)]
    pub friendliness: Option<Friendliness>,
    #[serde(default)]
    pub walking_preferences: Vec<String>,
    /// Photo reference (opaque to the core)
    #[serde(default)]
    pub photo: Option<String>,
}

impl DogProfile {
    pub fn new(id: impl Into<String>, dog_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dog_name: dog_name.into(),
            ..Self::default()
        }
    }

    /// A profile counts as created once the dog has a name.
    pub fn is_created(&self) -> bool {
        !self.dog_name.trim().is_empty()
    }

    pub fn has_photo(&self) -> bool {
        self.photo.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Case-insensitive preference lookup.
    pub fn prefers(&self, preference: &str) -> bool {
        self.walking_preferences
            .iter()
            .any(|p| p.eq_ignore_ascii_case(preference))
    }
}

/// Stored dog record: profile plus experience progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    #[serde(flatten)]
    pub profile: DogProfile,
    #[serde(flatten)]
    pub experience: ExperienceState,
}

impl Dog {
    pub fn new(profile: DogProfile) -> Self {
        Self {
            profile,
            experience: ExperienceState::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.profile.id
    }

    /// Current level, always derived from total XP.
    pub fn level(&self) -> u32 {
        self.experience.level()
    }
}
