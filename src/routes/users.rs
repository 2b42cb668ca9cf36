// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User CRUD routes.

use super::ApiResponse;
use crate::error::{AppError, Result};
use crate::models::{CreateUser, UpdateUser, User};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

/// User routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users", post(create_user))
        .route("/api/users/{id}", get(get_user))
        .route("/api/users/{id}", put(update_user))
        .route("/api/users/{id}", delete(delete_user))
}

async fn list_users(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<Vec<User>>>) {
    ApiResponse::ok(state.users.list())
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<User>>)> {
    let user = state
        .users
        .get(&id)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(ApiResponse::ok(user))
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUser>,
) -> Result<(StatusCode, Json<ApiResponse<User>>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email,
        location_id: payload.location_id,
        preferred_language: payload.preferred_language,
        notification_preference: payload.notification_preference,
    };
    state.users.insert(user.clone());
    Ok(ApiResponse::created(user, "User created successfully"))
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUser>,
) -> Result<(StatusCode, Json<ApiResponse<User>>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = state
        .users
        .update(&id, payload)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(ApiResponse::ok_with_message(
        user,
        "User updated successfully",
    ))
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Option<User>>>)> {
    if !state.users.remove(&id) {
        return Err(AppError::NotFound("User not found".to_string()));
    }
    Ok(ApiResponse::ok_with_message(
        None,
        "User deleted successfully",
    ))
}
