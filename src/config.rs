// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local runs.

use std::env;
use std::str::FromStr;

use crate::models::ActivityType;

/// Simulator configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the seed events JSON file
    pub events_path: String,

    // --- Walk simulation ---
    /// Duration of each simulated walk (minutes)
    pub sim_duration_minutes: f64,
    /// Distance of each simulated walk (km)
    pub sim_distance_km: f64,
    /// Activity type of each simulated walk
    pub sim_activity: ActivityType,
    /// Number of walks to simulate
    pub sim_walks: u32,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            events_path: "data/sample_events.json".to_string(),
            sim_duration_minutes: 30.0,
            sim_distance_km: 2.0,
            sim_activity: ActivityType::Casual,
            sim_walks: 1,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        Ok(Self {
            events_path: env::var("WALKIE_EVENTS_PATH").unwrap_or(defaults.events_path),
            sim_duration_minutes: parse_var(
                "WALKIE_SIM_DURATION_MINUTES",
                defaults.sim_duration_minutes,
            )?,
            sim_distance_km: parse_var("WALKIE_SIM_DISTANCE_KM", defaults.sim_distance_km)?,
            sim_activity: parse_var("WALKIE_SIM_ACTIVITY", defaults.sim_activity)?,
            sim_walks: parse_var("WALKIE_SIM_WALKS", defaults.sim_walks)?,
        })
    }
}

/// Read and parse an optional variable, using `default` when unset.
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
