//! Application layer services implementing business logic.
//!
//! Services validate input, coordinate repository calls and return
//! [`crate::error::AppError`] on failure. HTTP handlers only call services.
//!
//! # Available Services
//!
//! - [`services::usuario_service::UsuarioService`] - Usuario validation and persistence

pub mod services;
