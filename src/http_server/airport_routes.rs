//! Airport HTTP Routes
//!
//! CRUD endpoints over the airport directory.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tracing::debug;

use crate::directory::{Airport, AirportDirectory, DirectoryError, ListParams};

/// Directory shared across handlers
pub type AirportState = Arc<AirportDirectory>;

/// Create airport routes
///
/// The collection also answers on `/airports/`.
pub fn airport_routes(state: AirportState) -> Router {
    Router::new()
        .route("/airports", get(list_handler).post(create_handler))
        .route("/airports/", get(list_handler).post(create_handler))
        .route(
            "/airports/{icao}",
            get(get_handler).patch(update_handler).delete(delete_handler),
        )
        .with_state(state)
}

/// Unparseable bodies are answered like a body missing its required fields
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, DirectoryError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "rejected request body");
        DirectoryError::BadRequest
    })
}

async fn list_handler(
    State(directory): State<AirportState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Airport>>, DirectoryError> {
    let params = ListParams::parse(&query);
    Ok(Json(directory.list(&params)?))
}

/// Responds with the request body as sent, not the normalized record
async fn create_handler(
    State(directory): State<AirportState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, DirectoryError> {
    let body = json_body(body)?;
    directory.create(&body)?;
    Ok(Json(body))
}

async fn get_handler(
    State(directory): State<AirportState>,
    Path(icao): Path<String>,
) -> Result<Json<Airport>, DirectoryError> {
    Ok(Json(directory.get(&icao)?))
}

/// Responds with the request body as sent, not the normalized record
async fn update_handler(
    State(directory): State<AirportState>,
    Path(icao): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, DirectoryError> {
    let body = json_body(body)?;
    directory.update(&icao, &body)?;
    Ok(Json(body))
}

async fn delete_handler(
    State(directory): State<AirportState>,
    Path(icao): Path<String>,
) -> Result<Json<Airport>, DirectoryError> {
    Ok(Json(directory.delete(&icao)?))
}
