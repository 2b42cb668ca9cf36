// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reminder routes.

use super::ApiResponse;
use crate::error::{AppError, Result};
use crate::models::{CreateReminder, Reminder, UpdateReminder};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;

/// Reminder routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/reminders", post(create_reminder))
        .route("/api/reminders/user/{user_id}", get(get_user_reminders))
        .route("/api/reminders/{id}", put(update_reminder))
        .route("/api/reminders/{id}", delete(delete_reminder))
}

/// Create a reminder. A missing user or Ramadan day is a 400.
async fn create_reminder(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateReminder>,
) -> Result<(StatusCode, Json<ApiResponse<Reminder>>)> {
    let reminder = state
        .reminder_service
        .create(payload)
        .map_err(AppError::into_bad_request)?;
    Ok(ApiResponse::created(
        reminder,
        "Reminder created successfully",
    ))
}

/// List a user's reminders; no existence check on the user.
async fn get_user_reminders(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> (StatusCode, Json<ApiResponse<Vec<Reminder>>>) {
    ApiResponse::ok(state.reminder_service.reminders_for_user(&user_id))
}

/// Update a reminder: 404 if the id is unknown, 400 if a changed reference
/// does not resolve.
async fn update_reminder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateReminder>,
) -> Result<(StatusCode, Json<ApiResponse<Reminder>>)> {
    let updated = state
        .reminder_service
        .update(&id, payload)
        .map_err(AppError::into_bad_request)?
        .ok_or_else(|| AppError::NotFound("Reminder not found".to_string()))?;
    Ok(ApiResponse::ok_with_message(
        updated,
        "Reminder updated successfully",
    ))
}

/// Delete a reminder; 404 if it never existed.
async fn delete_reminder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Option<Reminder>>>)> {
    if !state.reminder_service.delete(&id) {
        return Err(AppError::NotFound("Reminder not found".to_string()));
    }
    Ok(ApiResponse::ok_with_message(
        None,
        "Reminder deleted successfully",
    ))
}
