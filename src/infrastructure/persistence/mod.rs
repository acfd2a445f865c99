//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgUsuarioRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryUsuarioRepository`] - In-process storage, used when no database
//!   is configured and in tests

pub mod memory_usuario_repository;
pub mod pg_usuario_repository;

pub use memory_usuario_repository::MemoryUsuarioRepository;
pub use pg_usuario_repository::PgUsuarioRepository;
