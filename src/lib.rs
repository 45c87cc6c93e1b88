// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Walkie-Walkie: experience and event matching core for dog-walking events
//!
//! This crate turns walks into XP, levels and achievements for each dog,
//! and filters walking events against search criteria and a dog's profile.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

use config::Config;
use db::DogStore;
use services::{EventCatalog, WalkProcessor};

/// Shared application state.
pub struct AppState<S: DogStore> {
    pub config: Config,
    pub events: EventCatalog,
    pub walks: WalkProcessor<S>,
}
