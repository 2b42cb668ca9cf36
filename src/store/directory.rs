// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Keyed directories for locations and users.

use crate::models::{Location, UpdateLocation, UpdateUser, User};
use dashmap::DashMap;

/// Keyed store of locations.
#[derive(Default)]
pub struct LocationDirectory {
    inner: DashMap<String, Location>,
}

impl LocationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory pre-seeded with the two launch cities.
    pub fn with_defaults() -> Self {
        let directory = Self::new();
        directory.insert(Location {
            id: "1".to_string(),
            city: "Mecca".to_string(),
            country: "Saudi Arabia".to_string(),
            latitude: 21.4225,
            longitude: 39.8262,
            timezone: "Asia/Riyadh".to_string(),
        });
        directory.insert(Location {
            id: "2".to_string(),
            city: "Jakarta".to_string(),
            country: "Indonesia".to_string(),
            latitude: -6.2088,
            longitude: 106.8456,
            timezone: "Asia/Jakarta".to_string(),
        });
        directory
    }

    pub fn list(&self) -> Vec<Location> {
        let mut locations: Vec<Location> =
            self.inner.iter().map(|entry| entry.value().clone()).collect();
        locations.sort_by(|a, b| a.id.cmp(&b.id));
        locations
    }

    pub fn get(&self, id: &str) -> Option<Location> {
        self.inner.get(id).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, location: Location) {
        self.inner.insert(location.id.clone(), location);
    }

    /// Shallow-merge an update; `None` if the id is unknown.
    pub fn update(&self, id: &str, update: UpdateLocation) -> Option<Location> {
        let mut entry = self.inner.get_mut(id)?;
        entry.value_mut().apply(update);
        Some(entry.value().clone())
    }
}

/// Keyed store of users.
#[derive(Default)]
pub struct UserDirectory {
    inner: DashMap<String, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> Vec<User> {
        let mut users: Vec<User> = self.inner.iter().map(|entry| entry.value().clone()).collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        users
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.inner.get(id).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.contains_key(id)
    }

    pub fn insert(&self, user: User) {
        self.inner.insert(user.id.clone(), user);
    }

    /// Shallow-merge an update; `None` if the id is unknown.
    pub fn update(&self, id: &str, update: UpdateUser) -> Option<User> {
        let mut entry = self.inner.get_mut(id)?;
        entry.value_mut().apply(update);
        Some(entry.value().clone())
    }

    /// Remove a user; true if one existed.
    pub fn remove(&self, id: &str) -> bool {
        self.inner.remove(id).is_some()
    }
}
