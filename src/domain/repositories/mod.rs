//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! with `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UsuarioRepository`] - Usuario CRUD operations
//!
//! # Testing
//!
//! See integration tests in `tests/repository_usuario.rs` for usage examples.

pub mod usuario_repository;

pub use usuario_repository::UsuarioRepository;

#[cfg(test)]
pub use usuario_repository::MockUsuarioRepository;
