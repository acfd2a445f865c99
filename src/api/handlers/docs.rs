//! Handler serving the OpenAPI document.

use axum::{Json, extract::State};
use serde_json::Value;

use crate::state::AppState;

/// Returns the OpenAPI document built at startup.
///
/// # Endpoint
///
/// `GET /api-docs/openapi.json`
pub async fn openapi_handler(State(state): State<AppState>) -> Json<Value> {
    Json(state.openapi.as_ref().clone())
}
