//! Core domain entities.
//!
//! Entities are plain data structures. Creation and partial updates use
//! separate input types:
//!
//! - [`Usuario`] - A persisted user record
//! - [`NewUsuario`] - Input for creating a record (storage assigns id and timestamps)
//! - [`UsuarioPatch`] - Partial update, `None` fields are left unchanged

pub mod usuario;

pub use usuario::{NewUsuario, Usuario, UsuarioPatch};
