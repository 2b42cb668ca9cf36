// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory storage layer.

pub mod directory;
pub mod schedule;

pub use directory::{LocationDirectory, UserDirectory};
pub use schedule::ScheduleRepository;
