// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ramadan schedule routes.

use super::ApiResponse;
use crate::error::{AppError, Result};
use crate::models::RamadanDay;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

/// Ramadan schedule routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/ramadan/schedule/{location_id}", get(get_schedule))
        .route("/api/ramadan/day/{id}", get(get_day))
        .route("/api/ramadan/calculate/{location_id}", post(calculate))
}

/// Get the generated schedule for a location. An unscheduled or unknown
/// location yields an empty array, not an error.
async fn get_schedule(
    State(state): State<Arc<AppState>>,
    Path(location_id): Path<String>,
) -> (StatusCode, Json<ApiResponse<Vec<RamadanDay>>>) {
    let schedule = state.schedule_service.schedule_for_location(&location_id);
    ApiResponse::ok(schedule)
}

/// Get one Ramadan day by id.
async fn get_day(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<RamadanDay>>)> {
    let day = state
        .schedule_service
        .day_by_id(&id)
        .ok_or_else(|| AppError::NotFound("Ramadan day not found".to_string()))?;
    Ok(ApiResponse::ok(day))
}

/// Calculate and persist a 30-day schedule for a location.
///
/// Failures (unknown location, undefined prayer times) surface as 400 with
/// the service's error message.
async fn calculate(
    State(state): State<Arc<AppState>>,
    Path(location_id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<RamadanDay>>>)> {
    let schedule = state
        .schedule_service
        .calculate_schedule(&location_id)
        .map_err(AppError::into_bad_request)?;
    Ok(ApiResponse::created(
        schedule,
        "Ramadan schedule calculated successfully",
    ))
}
