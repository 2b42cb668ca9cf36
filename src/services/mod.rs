// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod reminder;
pub mod schedule;

pub use reminder::ReminderService;
pub use schedule::ScheduleService;
