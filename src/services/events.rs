// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event catalog loading and filtering service.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::models::{DogProfile, Event, FilterCriteria};
use crate::services::matching::filter_events;

/// In-memory list of walking events.
#[derive(Debug, Default, Clone)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Load events from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, EventError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| EventError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load events from a JSON array string.
    pub fn load_from_json(json_data: &str) -> Result<Self, EventError> {
        let events: Vec<Event> =
            serde_json::from_str(json_data).map_err(|e| EventError::ParseError(e.to_string()))?;
        Self::from_events(events)
    }

    /// Build a catalog, rejecting duplicate event IDs.
    pub fn from_events(events: Vec<Event>) -> Result<Self, EventError> {
        let mut seen = HashSet::new();
        for event in &events {
            if !seen.insert(event.id) {
                return Err(EventError::DuplicateId(event.id));
            }
        }

        tracing::info!(count = events.len(), "Loaded events");
        Ok(Self { events })
    }

    /// Get the list of events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: u64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Events matching the criteria, in catalog order.
    pub fn filter(&self, criteria: &FilterCriteria, profile: Option<&DogProfile>) -> Vec<Event> {
        filter_events(&self.events, criteria, profile)
    }
}

/// Errors from event catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse events: {0}")]
    ParseError(String),

    #[error("Duplicate event id: {0}")]
    DuplicateId(u64),
}
