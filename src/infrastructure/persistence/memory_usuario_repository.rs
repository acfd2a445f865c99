//! In-process implementation of the usuario repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUsuario, Usuario, UsuarioPatch};
use crate::domain::repositories::UsuarioRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;

/// Stores usuarios in memory, in insertion order.
///
/// State is lost on restart. Used when no database is configured, and as the
/// backing store of HTTP integration tests.
#[derive(Debug, Default)]
pub struct MemoryUsuarioRepository {
    usuarios: RwLock<Vec<Usuario>>,
}

impl MemoryUsuarioRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: &str) -> AppError {
    AppError::not_found("Usuario not found", json!({ "id": id }))
}

#[async_trait]
impl UsuarioRepository for MemoryUsuarioRepository {
    async fn list(&self) -> Result<Vec<Usuario>, AppError> {
        Ok(self.usuarios.read().await.clone())
    }

    async fn create(&self, new_usuario: NewUsuario) -> Result<Usuario, AppError> {
        let now = Utc::now();
        let usuario = Usuario::register(generate_id(now), new_usuario, now);

        self.usuarios.write().await.push(usuario.clone());

        Ok(usuario)
    }

    async fn update(&self, id: &str, patch: UsuarioPatch) -> Result<Usuario, AppError> {
        let mut usuarios = self.usuarios.write().await;

        let usuario = usuarios
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| not_found(id))?;

        usuario.apply_patch(patch, Utc::now());

        Ok(usuario.clone())
    }

    async fn delete(&self, id: &str) -> Result<Usuario, AppError> {
        let mut usuarios = self.usuarios.write().await;

        let index = usuarios
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| not_found(id))?;

        Ok(usuarios.remove(index))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
