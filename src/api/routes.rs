//! API route configuration.

use crate::api::handlers::{
    create_usuario_handler, delete_usuario_handler, list_usuarios_handler, update_usuario_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// Usuario CRUD routes.
///
/// # Endpoints
///
/// - `GET    /usuario`        - List all usuarios
/// - `POST   /usuario`        - Create a usuario
/// - `PUT    /usuario/{id}`   - Update a usuario (id from the path)
/// - `DELETE /usuario`        - Delete a usuario (id from the body)
pub fn usuario_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/usuario",
            get(list_usuarios_handler)
                .post(create_usuario_handler)
                .delete(delete_usuario_handler),
        )
        .route("/usuario/{id}", put(update_usuario_handler))
}
