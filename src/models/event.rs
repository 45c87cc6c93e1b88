// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walking event model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A scheduled group walk. Read-only to the matching engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub title: String,
    /// Place name with an embedded distance, e.g. "Mount Eden, Auckland (6km)"
    pub location: String,
    #[serde(default)]
    pub attendee_count: u32,
    /// Display date, e.g. "Sat 30 August"
    #[serde(default)]
    pub date: String,
    /// 12-hour clock, e.g. "9:00 am"
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub emoji: String,
}

/// Part of the day an event starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// 6:00 to 11:59
    Morning,
    /// 12:00 to 16:59
    Afternoon,
    /// 17:00 to 5:59
    Evening,
}

impl TimeOfDay {
    pub fn from_hour(hour24: u32) -> Self {
        match hour24 {
            6..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }
}
