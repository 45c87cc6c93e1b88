// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event filter criteria.
//!
//! Every optional filter uses `None` for its "all" state. The JSON string
//! `"all"` deserializes to `None` so saved UI state loads unchanged.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::dog::{DogSize, EnergyLevel, Friendliness};
use crate::models::event::TimeOfDay;
use crate::models::walk::ActivityType;

/// Distance bucket, split at 3 km.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceFilter {
    /// <= 3 km
    Close,
    /// > 3 km
    Far,
}

/// Walking preference tags offered as filters.
pub const WALKING_PREFERENCE_FILTERS: &[&str] = &[
    "Morning walks",
    "Evening walks",
    "Beach areas",
    "Park areas",
    "Social groups",
    "Solo walks",
    "Long hikes",
    "Short walks",
    "Training focus",
    "Exercise focus",
    "Socialization focus",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Free text matched against title and location
    pub search: String,
    /// Use the dog profile to exclude poorly suited events
    pub smart_match: bool,
    #[serde(deserialize_with = "all_as_none")]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(deserialize_with = "all_as_none")]
    pub dog_size: Option<DogSize>,
    #[serde(deserialize_with = "all_as_none")]
    pub distance: Option<DistanceFilter>,
    #[serde(deserialize_with = "all_as_none")]
    pub activity_type: Option<ActivityType>,
    #[serde(deserialize_with = "all_as_none")]
    pub energy_level: Option<EnergyLevel>,
    #[serde(deserialize_with = "all_as_none")]
    pub friendliness: Option<Friendliness>,
    pub walking_preferences: Vec<String>,
}

impl FilterCriteria {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// True when any filter or the search text would narrow the result.
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || self.smart_match
            || self.time_of_day.is_some()
            || self.dog_size.is_some()
            || self.distance.is_some()
            || self.activity_type.is_some()
            || self.energy_level.is_some()
            || self.friendliness.is_some()
            || !self.walking_preferences.is_empty()
    }

    /// Add the preference if absent, remove it if present.
    pub fn toggle_walking_preference(&mut self, preference: &str) {
        if let Some(pos) = self
            .walking_preferences
            .iter()
            .position(|p| p == preference)
        {
            self.walking_preferences.remove(pos);
        } else {
            self.walking_preferences.push(preference.to_string());
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum AllMarker {
    All,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AllOr<T> {
    All(#[allow(dead_code)] AllMarker),
    Value(T),
}

fn all_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<AllOr<T>>::deserialize(deserializer)? {
        Some(AllOr::Value(value)) => Some(value),
        Some(AllOr::All(_)) | None => None,
    })
}
