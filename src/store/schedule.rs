// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Append-only repository of generated Ramadan days.

use crate::models::RamadanDay;
use std::collections::HashMap;
use std::sync::RwLock;

/// Both indices live under one lock so a batch append publishes to the
/// by-id and by-location views in a single step; a reader never sees a day
/// in one index but not the other, nor a partially written run.
#[derive(Default)]
struct ScheduleIndex {
    by_id: HashMap<String, RamadanDay>,
    /// Day ids per location, in insertion order.
    by_location: HashMap<String, Vec<String>>,
}

/// In-memory store of generated days, indexed by day id and location id.
///
/// Days are immutable history: there is no update or delete. Each
/// `calculate` run appends a complete 30-day batch; runs for the same
/// location accumulate rather than replace earlier ones.
#[derive(Default)]
pub struct ScheduleRepository {
    index: RwLock<ScheduleIndex>,
}

impl ScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically append a complete generation run.
    ///
    /// Callers guarantee id uniqueness (ids are freshly generated UUIDs).
    pub fn append_run(&self, days: Vec<RamadanDay>) {
        let mut index = self.index.write().expect("schedule index lock poisoned");
        for day in days {
            index
                .by_location
                .entry(day.location_id.clone())
                .or_default()
                .push(day.id.clone());
            index.by_id.insert(day.id.clone(), day);
        }
    }

    /// All days ever generated for a location, in insertion order.
    /// Empty if the location has never been scheduled.
    pub fn find_by_location(&self, location_id: &str) -> Vec<RamadanDay> {
        let index = self.index.read().expect("schedule index lock poisoned");
        match index.by_location.get(location_id) {
            Some(ids) => ids
                .iter()
                .filter_map(|id| index.by_id.get(id).cloned())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<RamadanDay> {
        let index = self.index.read().expect("schedule index lock poisoned");
        index.by_id.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        let index = self.index.read().expect("schedule index lock poisoned");
        index.by_id.contains_key(id)
    }
}
