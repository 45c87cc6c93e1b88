// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer.
//!
//! The engines never touch storage. Callers receive a [`DogStore`] and
//! pass plain data into the engines.

pub mod memory;

pub use memory::MemoryStore;

use crate::error::Result;
use crate::models::{CheckIn, Dog, WalkRecord, WalkStats};

/// Result of [`DogStore::process_walk_atomic`].
#[derive(Debug, Clone, PartialEq)]
pub enum WalkWrite<T> {
    /// The walk was new and has been applied
    Applied(T),
    /// The walk ID was already recorded; carries the current dog
    Duplicate(Dog),
}

/// Persistence interface injected into the walk processor.
pub trait DogStore: Send + Sync {
    // ─── Dogs ────────────────────────────────────────────────────
    fn get_dog(&self, dog_id: &str) -> Result<Option<Dog>>;
    fn upsert_dog(&self, dog: &Dog) -> Result<()>;
    fn list_dogs(&self) -> Result<Vec<Dog>>;
    /// Remove a dog and its walks. Returns `false` if it didn't exist.
    fn delete_dog(&self, dog_id: &str) -> Result<bool>;

    /// Run `update` on the stored dog while no other writer can touch it.
    ///
    /// Returns `None` if the dog doesn't exist. `update` must not call
    /// back into the store.
    fn update_dog<T, F>(&self, dog_id: &str, update: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut Dog) -> T;

    // ─── Walks ───────────────────────────────────────────────────
    /// Walks for a dog, oldest first.
    fn get_walks_for_dog(&self, dog_id: &str) -> Result<Vec<WalkRecord>>;

    /// Apply a walk to the current stored dog and record it, as one step.
    ///
    /// The duplicate check, `apply` and both writes happen under the dog's
    /// lock, so concurrent walks for one dog never overwrite each other.
    /// `apply` mutates the dog and returns the record to store plus a
    /// caller value. A walk ID already recorded for this dog writes
    /// nothing. Fails with `NotFound` if the dog doesn't exist.
    fn process_walk_atomic<T, F>(
        &self,
        dog_id: &str,
        walk_id: &str,
        apply: F,
    ) -> Result<WalkWrite<T>>
    where
        F: FnOnce(&mut Dog) -> (WalkRecord, T);

    // ─── Check-ins ───────────────────────────────────────────────
    /// Store a check-in and fold it into the stats aggregate.
    ///
    /// Returns `false` for a check-in ID already recorded.
    fn record_check_in(&self, check_in: &CheckIn) -> Result<bool>;
    fn get_check_ins(&self) -> Result<Vec<CheckIn>>;
    fn get_walk_stats(&self) -> Result<WalkStats>;
}
