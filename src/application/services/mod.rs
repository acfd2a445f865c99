//! Business logic services for the application layer.

pub mod usuario_service;

pub use usuario_service::UsuarioService;
