// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod location;
pub mod ramadan_day;
pub mod reminder;
pub mod user;

pub use location::{CreateLocation, Location, UpdateLocation};
pub use ramadan_day::RamadanDay;
pub use reminder::{CreateReminder, Reminder, ReminderType, UpdateReminder};
pub use user::{CreateUser, NotificationPreference, UpdateUser, User};
