//! Usuario management service.

use crate::domain::entities::{NewUsuario, Usuario, UsuarioPatch};
use crate::domain::repositories::UsuarioRepository;
use crate::error::AppError;
use crate::utils::id_generator::is_valid_id;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

/// Service performing the create/read/update/delete operations on usuarios.
///
/// All validation lives here; handlers forward payloads untouched and report
/// whatever error comes back.
pub struct UsuarioService {
    repository: Arc<dyn UsuarioRepository>,
}

impl UsuarioService {
    /// Creates a new usuario service.
    pub fn new(repository: Arc<dyn UsuarioRepository>) -> Self {
        Self { repository }
    }

    /// Lists all usuarios in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list(&self) -> Result<Vec<Usuario>, AppError> {
        self.repository.list().await
    }

    /// Registers a new usuario.
    ///
    /// # Validation
    ///
    /// - `nombre` and `apellido` are required
    /// - Neither may be blank; values are stored as given
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(
        &self,
        nombre: Option<String>,
        apellido: Option<String>,
    ) -> Result<Usuario, AppError> {
        let new_usuario = NewUsuario {
            nombre: required("nombre", nombre)?,
            apellido: required("apellido", apellido)?,
        };
        new_usuario.validate()?;

        let created = self.repository.create(new_usuario).await?;
        tracing::info!(id = %created.id, "Usuario created");

        Ok(created)
    }

    /// Updates the provided fields of an existing usuario.
    ///
    /// Absent fields are left unchanged; `fecha_actualizacion` is refreshed
    /// even when no field is provided.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a provided field is invalid.
    /// Returns [`AppError::NotFound`] if the usuario does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update(
        &self,
        id: &str,
        nombre: Option<String>,
        apellido: Option<String>,
    ) -> Result<Usuario, AppError> {
        let patch = UsuarioPatch {
            nombre,
            apellido,
        };
        patch.validate()?;

        check_id(id)?;

        let updated = self.repository.update(id, patch).await?;
        tracing::info!(id = %updated.id, "Usuario updated");

        Ok(updated)
    }

    /// Deletes the usuario identified by `id` and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if no id is given.
    /// Returns [`AppError::NotFound`] if the usuario does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, id: Option<String>) -> Result<Usuario, AppError> {
        let id = id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::validation("id is required", json!({ "field": "id" })))?;

        check_id(&id)?;

        let deleted = self.repository.delete(&id).await?;
        tracing::info!(id = %deleted.id, "Usuario deleted");

        Ok(deleted)
    }

    /// Returns true if the storage backend is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| {
        AppError::validation(format!("{field} is required"), json!({ "field": field }))
    })
}

/// Ids that storage could never have produced cannot match a record.
fn check_id(id: &str) -> Result<(), AppError> {
    if is_valid_id(id) {
        Ok(())
    } else {
        Err(AppError::not_found(
            "Usuario not found",
            json!({ "id": id, "hint": "id must be 24 hex characters" }),
        ))
    }
}
