//! Observability HTTP Routes
//!
//! Health check for the airport service.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::airport_routes::AirportState;
use crate::directory::DirectoryError;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Records currently held
    pub airports: usize,
}

/// Health check route
pub fn health_routes(state: AirportState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler(
    State(directory): State<AirportState>,
) -> Result<impl IntoResponse, DirectoryError> {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        airports: directory.len()?,
    };

    Ok((StatusCode::OK, Json(response)))
}
