// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walkie-Walkie walk simulator
//!
//! Loads the seed events, lists the ones that suit a sample dog, and runs
//! simulated walks through the experience engine.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walkie_walkie::{
    config::Config,
    db::{DogStore, MemoryStore},
    models::{
        CheckIn, Dog, DogProfile, DogSize, EnergyLevel, FilterCriteria, Friendliness, WalkActivity,
    },
    services::{level_progress, summarize_history, EventCatalog, WalkProcessor},
    AppState,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(events_path = %config.events_path, "Starting walk simulator");

    // Load seed events
    let events = EventCatalog::load_from_file(&config.events_path)?;

    let store = MemoryStore::with_dogs([Dog::new(sample_dog())]);
    let state = AppState {
        config: config.clone(),
        events,
        walks: WalkProcessor::new(store),
    };

    // Suggested events for the sample dog
    let dog = sample_dog();
    let criteria = FilterCriteria {
        smart_match: true,
        ..FilterCriteria::default()
    };
    let suggested = state.events.filter(&criteria, Some(&dog));
    tracing::info!(
        total = state.events.events().len(),
        suggested = suggested.len(),
        "Smart match suggestions"
    );
    println!("{}", serde_json::to_string_pretty(&suggested)?);

    // Simulated walks
    let walk = WalkActivity::new(
        state.config.sim_duration_minutes,
        state.config.sim_distance_km,
        state.config.sim_activity,
    );
    for n in 1..=state.config.sim_walks {
        let outcome = state
            .walks
            .complete_walk(&dog.id, &format!("sim-{}", n), &walk)?;
        println!("{}", serde_json::to_string(&outcome)?);

        let now = chrono::Utc::now();
        state.walks.store().record_check_in(&CheckIn {
            id: outcome.walk_id.clone(),
            place_id: "sim-park".to_string(),
            place_name: "Simulated Park".to_string(),
            date: now,
            distance_km: Some(state.config.sim_distance_km),
            difficulty: None,
        })?;
    }

    let check_ins = state.walks.store().get_check_ins()?;
    let history = summarize_history(&check_ins, chrono::Utc::now().date_naive());
    tracing::info!(
        total_walks = history.total_walks,
        total_distance_km = history.total_distance_km,
        "Walking history"
    );

    let total_xp = state
        .walks
        .store()
        .list_dogs()?
        .first()
        .map(|d| d.experience.total_xp)
        .unwrap_or(0);
    println!("{}", serde_json::to_string_pretty(&level_progress(total_xp))?);

    Ok(())
}

/// The default profile the front-end ships with.
fn sample_dog() -> DogProfile {
    DogProfile {
        id: "1".to_string(),
        dog_name: "Buddy".to_string(),
        breed: "Golden Retriever".to_string(),
        age: "3 years old".to_string(),
        size: Some(DogSize::Large),
        energy: Some(EnergyLevel::High),
        friendliness: Some(Friendliness::VeryFriendly),
        walking_preferences: vec!["Morning walks".to_string(), "Beach areas".to_string()],
        photo: None,
    }
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("walkie_walkie=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
