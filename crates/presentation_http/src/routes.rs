//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Route overview
        .route("/", get(handlers::home::home))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Climate API (v1.0)
        .route("/api/v1.0/precipitation", get(handlers::climate::precipitation))
        .route("/api/v1.0/stations", get(handlers::climate::stations))
        .route("/api/v1.0/tobs", get(handlers::climate::tobs))
        .route(
            "/api/v1.0/{start}",
            get(handlers::climate::temperature_range_from),
        )
        .route(
            "/api/v1.0/{start}/{end}",
            get(handlers::climate::temperature_range),
        )
        // Attach state
        .with_state(state)
}
