//! Shared application state injected into handlers.

use serde_json::Value;
use std::sync::Arc;

use crate::application::services::UsuarioService;

/// State shared by every request. Cloning is cheap; everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub usuario_service: Arc<UsuarioService>,
    /// OpenAPI document, built once at startup.
    pub openapi: Arc<Value>,
}

impl AppState {
    pub fn new(usuario_service: Arc<UsuarioService>, openapi: Value) -> Self {
        Self {
            usuario_service,
            openapi: Arc::new(openapi),
        }
    }
}
