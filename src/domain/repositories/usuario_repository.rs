//! Repository trait for usuario storage.

use crate::domain::entities::{NewUsuario, Usuario, UsuarioPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing usuarios.
///
/// Storage owns the persisted state: it assigns ids and both timestamps on
/// creation and refreshes `fecha_actualizacion` on update.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUsuarioRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUsuarioRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    /// Lists every usuario in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Usuario>, AppError>;

    /// Persists a new usuario, assigning its id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_usuario: NewUsuario) -> Result<Usuario, AppError>;

    /// Applies a partial update and refreshes `fecha_actualizacion`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no usuario has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: &str, patch: UsuarioPatch) -> Result<Usuario, AppError>;

    /// Removes a usuario and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no usuario has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: &str) -> Result<Usuario, AppError>;

    /// Returns true if the storage backend is reachable.
    async fn health_check(&self) -> bool;
}
