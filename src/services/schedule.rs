// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ramadan schedule generation and lookup.

use crate::error::{AppError, Result};
use crate::models::{Location, RamadanDay};
use crate::prayer;
use crate::store::{LocationDirectory, ScheduleRepository};
use crate::time_utils::{format_hhmm, minus_minutes};
use chrono::{NaiveDate, TimeDelta};
use chrono_tz::Tz;
use std::sync::Arc;

/// Length of a generation run, in days.
pub const RAMADAN_DAYS: u32 = 30;

/// Sahur starts this many minutes before Fajr.
pub const SAHUR_OFFSET_MINUTES: i64 = 90;

/// One day's computed prayer window, as local `HH:MM` clock times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTimes {
    pub sahur_start: String,
    pub fajr: String,
    pub maghrib: String,
}

/// Compute the Sahur/Fajr/Maghrib window for one date at a location.
///
/// Pure: calls the astronomical calculator, converts the UTC instants to
/// the location's timezone, and truncates to minute resolution. Sahur
/// start is a fixed offset before Fajr on the same nominal day; the bare
/// clock time wraps rather than rolling to the previous date when Fajr
/// falls before 01:30.
pub fn compute_daily_times(date: NaiveDate, location: &Location) -> Result<DailyTimes> {
    let instants = prayer::prayer_instants(date, location.latitude, location.longitude)
        .map_err(|e| AppError::Calculation(e.to_string()))?;

    let tz: Tz = location.timezone.parse().map_err(|_| {
        AppError::BadRequest(format!("Unknown timezone: {}", location.timezone))
    })?;

    let fajr = instants.fajr.with_timezone(&tz).time();
    let maghrib = instants.maghrib.with_timezone(&tz).time();

    Ok(DailyTimes {
        sahur_start: format_hhmm(minus_minutes(fajr, SAHUR_OFFSET_MINUTES)),
        fajr: format_hhmm(fajr),
        maghrib: format_hhmm(maghrib),
    })
}

/// Generates and serves Ramadan schedules.
pub struct ScheduleService {
    locations: Arc<LocationDirectory>,
    repository: Arc<ScheduleRepository>,
    /// Campaign start date: day 1 of every generation run.
    ramadan_start: NaiveDate,
}

impl ScheduleService {
    pub fn new(
        locations: Arc<LocationDirectory>,
        repository: Arc<ScheduleRepository>,
        ramadan_start: NaiveDate,
    ) -> Self {
        Self {
            locations,
            repository,
            ramadan_start,
        }
    }

    /// Generate and persist a 30-day schedule for a location.
    ///
    /// The run is staged in full before anything is written: a calculation
    /// failure on any day aborts with no repository change, and concurrent
    /// readers observe either none or all of the run. Each call appends a
    /// fresh run; earlier runs for the same location are kept.
    pub fn calculate_schedule(&self, location_id: &str) -> Result<Vec<RamadanDay>> {
        let location = self
            .locations
            .get(location_id)
            .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;

        let mut run = Vec::with_capacity(RAMADAN_DAYS as usize);
        for i in 0..RAMADAN_DAYS {
            let date = self.ramadan_start + TimeDelta::days(i as i64);
            let times = compute_daily_times(date, &location)?;

            run.push(RamadanDay {
                id: uuid::Uuid::new_v4().to_string(),
                date: date.format("%Y-%m-%d").to_string(),
                day_of_ramadan: i + 1,
                sahur_start: times.sahur_start,
                sahur_end: times.fajr.clone(),
                fajr_time: times.fajr,
                iftar_time: times.maghrib.clone(),
                maghrib_time: times.maghrib,
                location_id: location.id.clone(),
            });
        }

        self.repository.append_run(run.clone());
        tracing::info!(
            location_id = %location.id,
            city = %location.city,
            days = run.len(),
            "Ramadan schedule generated"
        );
        Ok(run)
    }

    /// All days ever generated for a location. Empty, not an error, if the
    /// location was never scheduled or does not exist; no directory check.
    pub fn schedule_for_location(&self, location_id: &str) -> Vec<RamadanDay> {
        self.repository.find_by_location(location_id)
    }

    /// Absence is reported as `None`; the HTTP layer decides 404 semantics.
    pub fn day_by_id(&self, id: &str) -> Option<RamadanDay> {
        self.repository.find_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mecca() -> Location {
        Location {
            id: "1".to_string(),
            city: "Mecca".to_string(),
            country: "Saudi Arabia".to_string(),
            latitude: 21.4225,
            longitude: 39.8262,
            timezone: "Asia/Riyadh".to_string(),
        }
    }

    fn service() -> ScheduleService {
        ScheduleService::new(
            Arc::new(LocationDirectory::with_defaults()),
            Arc::new(ScheduleRepository::new()),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
    }

    #[test]
    fn test_compute_daily_times_offset() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let times = compute_daily_times(date, &mecca()).unwrap();

        let fajr = chrono::NaiveTime::parse_from_str(&times.fajr, "%H:%M").unwrap();
        let sahur = chrono::NaiveTime::parse_from_str(&times.sahur_start, "%H:%M").unwrap();
        assert_eq!(minus_minutes(fajr, SAHUR_OFFSET_MINUTES), sahur);
    }

    #[test]
    fn test_compute_daily_times_deterministic() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(
            compute_daily_times(date, &mecca()).unwrap(),
            compute_daily_times(date, &mecca()).unwrap()
        );
    }

    #[test]
    fn test_compute_rejects_unknown_timezone() {
        let mut location = mecca();
        location.timezone = "Mars/Olympus_Mons".to_string();
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(matches!(
            compute_daily_times(date, &location),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_calculate_schedule_sequencing() {
        let service = service();
        let run = service.calculate_schedule("1").unwrap();

        assert_eq!(run.len(), 30);
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        for (k, day) in run.iter().enumerate() {
            assert_eq!(day.day_of_ramadan, k as u32 + 1);
            let expected = start + TimeDelta::days(k as i64);
            assert_eq!(day.date, expected.format("%Y-%m-%d").to_string());
            assert_eq!(day.sahur_end, day.fajr_time);
            assert_eq!(day.iftar_time, day.maghrib_time);
            assert_eq!(day.location_id, "1");
        }
    }

    #[test]
    fn test_calculate_schedule_unknown_location() {
        let service = service();
        let err = service.calculate_schedule("missing").unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Location not found"));
    }

    #[test]
    fn test_repeated_runs_accumulate() {
        let service = service();
        service.calculate_schedule("1").unwrap();
        service.calculate_schedule("1").unwrap();
        assert_eq!(service.schedule_for_location("1").len(), 60);

        // Lookups are pure: repeating one changes nothing.
        let first = service.schedule_for_location("1");
        let ids: Vec<_> = first.iter().map(|d| d.id.clone()).collect();
        let again: Vec<_> = service
            .schedule_for_location("1")
            .iter()
            .map(|d| d.id.clone())
            .collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn test_lookup_does_not_require_location() {
        let service = service();
        assert!(service.schedule_for_location("nowhere").is_empty());
        assert!(service.day_by_id("unknown").is_none());
    }

    #[test]
    fn test_failed_run_writes_nothing() {
        let directory = LocationDirectory::new();
        directory.insert(Location {
            id: "svalbard".to_string(),
            city: "Longyearbyen".to_string(),
            country: "Norway".to_string(),
            latitude: 78.2232,
            longitude: 15.6267,
            timezone: "Arctic/Longyearbyen".to_string(),
        });
        let repository = Arc::new(ScheduleRepository::new());
        // A June start runs straight into the midnight sun.
        let service = ScheduleService::new(
            Arc::new(directory),
            Arc::clone(&repository),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        );

        let err = service.calculate_schedule("svalbard").unwrap_err();
        assert!(matches!(err, AppError::Calculation(_)));
        assert!(repository.find_by_location("svalbard").is_empty());
    }
}
