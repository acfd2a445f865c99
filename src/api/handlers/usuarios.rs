//! Handlers for the usuario CRUD endpoints.
//!
//! Every handler makes exactly one service call and sends its outcome through
//! the envelope: success with 200, any failure with 400. Handlers never
//! validate; body rejections are reported like service errors.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde::Serialize;

use crate::api::dto::usuario::{
    CreateUsuarioRequest, DeleteUsuarioRequest, UpdateUsuarioRequest, UsuarioItem,
};
use crate::api::response;
use crate::error::AppError;
use crate::state::AppState;

fn respond<T: Serialize>(result: Result<T, AppError>) -> Response {
    match result {
        Ok(data) => response::success(data, StatusCode::OK),
        Err(e) => response::error(e, StatusCode::BAD_REQUEST),
    }
}

/// Lists every registered usuario.
///
/// # Endpoint
///
/// `GET /usuario`
///
/// The request body is ignored.
pub async fn list_usuarios_handler(State(state): State<AppState>) -> Response {
    let result = state
        .usuario_service
        .list()
        .await
        .map(|usuarios| {
            usuarios
                .into_iter()
                .map(UsuarioItem::from)
                .collect::<Vec<_>>()
        });

    respond(result)
}

/// Registers a new usuario.
///
/// # Endpoint
///
/// `POST /usuario`
///
/// # Request Body
///
/// ```json
/// { "nombre": "David", "apellido": "Clavijo" }
/// ```
///
/// # Errors
///
/// Returns 400 if a field is missing or blank, or the body is not JSON.
pub async fn create_usuario_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUsuarioRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return respond::<UsuarioItem>(Err(rejection.into())),
    };

    let result = state
        .usuario_service
        .create(payload.nombre, payload.apellido)
        .await
        .map(UsuarioItem::from);

    respond(result)
}

/// Updates the provided fields of a usuario.
///
/// # Endpoint
///
/// `PUT /usuario/{id}`
///
/// # Errors
///
/// Returns 400 if the usuario does not exist, a provided field is blank, or
/// the body is not JSON.
pub async fn update_usuario_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateUsuarioRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return respond::<UsuarioItem>(Err(rejection.into())),
    };

    let result = state
        .usuario_service
        .update(&id, payload.nombre, payload.apellido)
        .await
        .map(UsuarioItem::from);

    respond(result)
}

/// Deletes a usuario and returns the removed record.
///
/// # Endpoint
///
/// `DELETE /usuario`
///
/// The record is identified by the `id` field of the body, not by the path.
///
/// # Errors
///
/// Returns 400 if `id` is missing, the usuario does not exist, or the body is
/// not JSON.
pub async fn delete_usuario_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeleteUsuarioRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return respond::<UsuarioItem>(Err(rejection.into())),
    };

    let result = state
        .usuario_service
        .delete(payload.id)
        .await
        .map(UsuarioItem::from);

    respond(result)
}
