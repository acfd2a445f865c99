//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod docs;
pub mod health;
pub mod usuarios;

pub use docs::openapi_handler;
pub use health::health_handler;
pub use usuarios::{
    create_usuario_handler, delete_usuario_handler, list_usuarios_handler, update_usuario_handler,
};
