// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Ramadan Scheduler: location-aware Ramadan observance schedules
//!
//! This crate provides the backend API for generating 30-day Ramadan
//! schedules (Sahur window, Fajr, Iftar/Maghrib) from astronomical
//! prayer-time computation, and for managing per-user reminders anchored
//! to those days.

pub mod config;
pub mod error;
pub mod models;
pub mod prayer;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use services::{ReminderService, ScheduleService};
use std::sync::Arc;
use store::{LocationDirectory, ScheduleRepository, UserDirectory};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub locations: Arc<LocationDirectory>,
    pub users: Arc<UserDirectory>,
    pub schedule_repository: Arc<ScheduleRepository>,
    pub schedule_service: ScheduleService,
    pub reminder_service: ReminderService,
}

impl AppState {
    /// Wire up stores and services around a configuration.
    pub fn new(config: Config) -> Self {
        let locations = Arc::new(LocationDirectory::with_defaults());
        let users = Arc::new(UserDirectory::new());
        let schedule_repository = Arc::new(ScheduleRepository::new());

        let schedule_service = ScheduleService::new(
            Arc::clone(&locations),
            Arc::clone(&schedule_repository),
            config.ramadan_start,
        );
        let reminder_service =
            ReminderService::new(Arc::clone(&users), Arc::clone(&schedule_repository));

        Self {
            config,
            locations,
            users,
            schedule_repository,
            schedule_service,
            reminder_service,
        }
    }
}
