// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory store backed by concurrent maps.

use dashmap::DashMap;
use std::sync::{Mutex, MutexGuard};

use crate::db::{DogStore, WalkWrite};
use crate::error::{AppError, Result};
use crate::models::{CheckIn, Dog, WalkRecord, WalkStats};
use crate::time_utils::format_utc_rfc3339;

/// Thread-safe in-memory [`DogStore`].
#[derive(Default)]
pub struct MemoryStore {
    dogs: DashMap<String, Dog>,
    /// Walk records per dog ID, oldest first
    walks: DashMap<String, Vec<WalkRecord>>,
    check_ins: DashMap<String, CheckIn>,
    stats: Mutex<WalkStats>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with dogs.
    pub fn with_dogs(dogs: impl IntoIterator<Item = Dog>) -> Self {
        let store = Self::new();
        for dog in dogs {
            store.dogs.insert(dog.id().to_string(), dog);
        }
        store
    }

    fn lock_stats(&self) -> Result<MutexGuard<'_, WalkStats>> {
        self.stats
            .lock()
            .map_err(|_| AppError::Storage("Stats lock poisoned".to_string()))
    }
}

impl DogStore for MemoryStore {
    fn get_dog(&self, dog_id: &str) -> Result<Option<Dog>> {
        Ok(self.dogs.get(dog_id).map(|d| d.clone()))
    }

    fn upsert_dog(&self, dog: &Dog) -> Result<()> {
        if dog.id().is_empty() {
            return Err(AppError::BadRequest("Dog ID must not be empty".to_string()));
        }
        self.dogs.insert(dog.id().to_string(), dog.clone());
        Ok(())
    }

    fn list_dogs(&self) -> Result<Vec<Dog>> {
        let mut dogs: Vec<Dog> = self.dogs.iter().map(|d| d.clone()).collect();
        dogs.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(dogs)
    }

    fn delete_dog(&self, dog_id: &str) -> Result<bool> {
        let removed = self.dogs.remove(dog_id).is_some();
        self.walks.remove(dog_id);
        if removed {
            tracing::info!(dog_id, "Deleted dog and walk history");
        }
        Ok(removed)
    }

    fn update_dog<T, F>(&self, dog_id: &str, update: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut Dog) -> T,
    {
        Ok(self.dogs.get_mut(dog_id).map(|mut dog| update(&mut *dog)))
    }

    fn get_walks_for_dog(&self, dog_id: &str) -> Result<Vec<WalkRecord>> {
        Ok(self
            .walks
            .get(dog_id)
            .map(|w| w.clone())
            .unwrap_or_default())
    }

    fn process_walk_atomic<T, F>(
        &self,
        dog_id: &str,
        walk_id: &str,
        apply: F,
    ) -> Result<WalkWrite<T>>
    where
        F: FnOnce(&mut Dog) -> (WalkRecord, T),
    {
        // Lock order is always dog entry, then walks entry.
        let mut dog = self
            .dogs
            .get_mut(dog_id)
            .ok_or_else(|| AppError::NotFound(format!("Dog {}", dog_id)))?;
        let mut walks = self.walks.entry(dog_id.to_string()).or_default();

        if walks.iter().any(|w| w.walk_id == walk_id) {
            tracing::debug!(dog_id, walk_id, "Walk already processed (idempotent skip)");
            return Ok(WalkWrite::Duplicate(dog.clone()));
        }

        let (record, result) = apply(&mut *dog);
        walks.push(record);
        Ok(WalkWrite::Applied(result))
    }

    fn record_check_in(&self, check_in: &CheckIn) -> Result<bool> {
        let now = format_utc_rfc3339(chrono::Utc::now());
        let mut stats = self.lock_stats()?;

        if !stats.update_from_check_in(check_in, &now) {
            return Ok(false);
        }
        self.check_ins
            .insert(check_in.id.clone(), check_in.clone());
        Ok(true)
    }

    fn get_check_ins(&self) -> Result<Vec<CheckIn>> {
        Ok(self.check_ins.iter().map(|c| c.clone()).collect())
    }

    fn get_walk_stats(&self) -> Result<WalkStats> {
        Ok(self.lock_stats()?.clone())
    }
}
