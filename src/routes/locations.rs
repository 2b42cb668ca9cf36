// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Location CRUD routes.

use super::ApiResponse;
use crate::error::{AppError, Result};
use crate::models::{CreateLocation, Location, UpdateLocation};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

/// Location routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/locations", get(list_locations))
        .route("/api/locations", post(create_location))
        .route("/api/locations/{id}", get(get_location))
        .route("/api/locations/{id}", put(update_location))
}

async fn list_locations(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<Vec<Location>>>) {
    ApiResponse::ok(state.locations.list())
}

async fn get_location(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Location>>)> {
    let location = state
        .locations
        .get(&id)
        .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;
    Ok(ApiResponse::ok(location))
}

async fn create_location(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateLocation>,
) -> Result<(StatusCode, Json<ApiResponse<Location>>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let location = Location {
        id: uuid::Uuid::new_v4().to_string(),
        city: payload.city,
        country: payload.country,
        latitude: payload.latitude,
        longitude: payload.longitude,
        timezone: payload.timezone,
    };
    state.locations.insert(location.clone());
    Ok(ApiResponse::created(
        location,
        "Location created successfully",
    ))
}

async fn update_location(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateLocation>,
) -> Result<(StatusCode, Json<ApiResponse<Location>>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let location = state
        .locations
        .update(&id, payload)
        .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;
    Ok(ApiResponse::ok_with_message(
        location,
        "Location updated successfully",
    ))
}
