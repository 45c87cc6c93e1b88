// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Place check-in model for walking history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded visit to a walking place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    /// Unique check-in ID
    pub id: String,
    /// Place identifier
    pub place_id: String,
    /// Place display name
    pub place_name: String,
    /// When the check-in happened
    pub date: DateTime<Utc>,
    /// Walk distance in km, if known
    #[serde(default)]
    pub distance_km: Option<f64>,
    /// Route difficulty ("easy", "moderate", "hard")
    #[serde(default)]
    pub difficulty: Option<String>,
}
