// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ramadan Scheduler API Server
//!
//! Serves location-aware Ramadan schedules derived from astronomical
//! prayer-time computation, plus per-user meal reminders.

use ramadan_scheduler::{config::Config, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        port = config.port,
        ramadan_start = %config.ramadan_start,
        "Starting Ramadan Scheduler API"
    );

    // Build shared state (seeded location directory, empty schedule store)
    let state = Arc::new(AppState::new(config));
    tracing::info!(
        locations = state.locations.list().len(),
        "Location directory seeded"
    );

    // Build router
    let app = ramadan_scheduler::routes::create_router(Arc::clone(&state));

    // Start server
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ramadan_scheduler=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
