//! Application error type shared by every layer.
//!
//! Errors are created by the controller and the repositories, and turned into
//! HTTP responses only by [`crate::api::response::error`], which decides the
//! status code. The variant picks the machine-readable `code` of the body.

use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

/// Error description carried inside the error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    BadRequest { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable identifier of the error category.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::BadRequest { .. } => "bad_request",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Consumes the error into the description sent to clients.
    pub fn into_info(self) -> ErrorInfo {
        let code = self.code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::BadRequest { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        // Driver text stays in the logs.
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: serde_json::Map<String, Value> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), json!(messages))
            })
            .collect();

        AppError::validation("Validation failed", json!({ "fields": fields }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());

        let reason = match rejection {
            JsonRejection::JsonDataError(_) => "body does not match the expected fields",
            JsonRejection::JsonSyntaxError(_) => "body is not valid JSON",
            JsonRejection::MissingJsonContentType(_) => "expected content-type application/json",
            _ => "body could not be read",
        };

        AppError::bad_request("Invalid request body", json!({ "reason": reason }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_per_variant() {
        assert_eq!(
            AppError::validation("x", json!({})).code(),
            "validation_error"
        );
        assert_eq!(AppError::not_found("x", json!({})).code(), "not_found");
        assert_eq!(AppError::bad_request("x", json!({})).code(), "bad_request");
        assert_eq!(AppError::internal("x", json!({})).code(), "internal_error");
    }

    #[test]
    fn test_display_is_message() {
        let err = AppError::not_found("Usuario not found", json!({"id": "abc"}));
        assert_eq!(err.to_string(), "Usuario not found");
    }

    #[test]
    fn test_into_info_keeps_details() {
        let info = AppError::not_found("Usuario not found", json!({"id": "abc"})).into_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Usuario not found");
        assert_eq!(info.details["id"], "abc");
    }

    #[test]
    fn test_sqlx_error_is_normalized() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        let info = err.into_info();

        assert_eq!(info.code, "internal_error");
        assert_eq!(info.message, "Database error");
        assert_eq!(info.details, json!({}));
    }
}
