// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use walkie_walkie::db::MemoryStore;
use walkie_walkie::models::{Dog, DogProfile, DogSize, EnergyLevel, Event, Friendliness};
use walkie_walkie::services::{EventCatalog, WalkProcessor};

/// Load the seed events shipped in data/.
#[allow(dead_code)]
pub fn sample_events() -> Vec<Event> {
    EventCatalog::load_from_file("data/sample_events.json")
        .expect("Failed to load sample events - is data/ committed?")
        .events()
        .to_vec()
}

/// Build an event with the fields the matching engine looks at.
#[allow(dead_code)]
pub fn make_event(id: u64, title: &str, location: &str, attendees: u32, start: &str) -> Event {
    Event {
        id,
        title: title.to_string(),
        location: location.to_string(),
        attendee_count: attendees,
        date: "Sat 6 September".to_string(),
        start_time: start.to_string(),
        end_time: String::new(),
        emoji: String::new(),
    }
}

/// The default profile the front-end ships with.
#[allow(dead_code)]
pub fn buddy() -> DogProfile {
    DogProfile {
        id: "1".to_string(),
        dog_name: "Buddy".to_string(),
        breed: "Golden Retriever".to_string(),
        age: "3 years old".to_string(),
        size: Some(DogSize::Large),
        energy: Some(EnergyLevel::High),
        friendliness: Some(Friendliness::VeryFriendly),
        walking_preferences: vec![
            "Morning walks".to_string(),
            "Beach areas".to_string(),
            "Social groups".to_string(),
        ],
        photo: None,
    }
}

/// Create a walk processor over an in-memory store holding Buddy.
#[allow(dead_code)]
pub fn test_processor() -> WalkProcessor<MemoryStore> {
    WalkProcessor::new(MemoryStore::with_dogs([Dog::new(buddy())]))
}

/// Ids of a list of events, for compact assertions.
#[allow(dead_code)]
pub fn ids(events: &[Event]) -> Vec<u64> {
    events.iter().map(|e| e.id).collect()
}
