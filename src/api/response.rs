//! Uniform response envelope.
//!
//! Every `/usuario` response has the same shape:
//!
//! ```json
//! { "statusCode": 200, "data": { ... } }
//! { "statusCode": 400, "error": { "code": "not_found", "message": "...", "details": { ... } } }
//! ```
//!
//! The caller picks the status code; the envelope only formats.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::{AppError, ErrorInfo};

/// Body of a successful response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBody<T: Serialize> {
    pub status_code: u16,
    pub data: T,
}

/// Body of a failed response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub error: ErrorInfo,
}

/// Writes `status` with `data` carried verbatim.
pub fn success<T: Serialize>(data: T, status: StatusCode) -> Response {
    let body = SuccessBody {
        status_code: status.as_u16(),
        data,
    };

    (status, Json(body)).into_response()
}

/// Writes `status` with the normalized description of `error`.
pub fn error(error: AppError, status: StatusCode) -> Response {
    tracing::warn!(
        status = status.as_u16(),
        code = error.code(),
        "Request failed: {}",
        error
    );

    let body = ErrorBody {
        status_code: status.as_u16(),
        error: error.into_info(),
    };

    (status, Json(body)).into_response()
}
