//! PostgreSQL implementation of the usuario repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewUsuario, Usuario, UsuarioPatch};
use crate::domain::repositories::UsuarioRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;

/// PostgreSQL repository for usuarios.
///
/// Uses hard delete. Ids are generated in the application so both storage
/// backends hand out the same id format.
pub struct PgUsuarioRepository {
    pool: Arc<PgPool>,
}

impl PgUsuarioRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UsuarioRow {
    id: String,
    nombre: String,
    apellido: String,
    fecha_registro: DateTime<Utc>,
    fecha_actualizacion: DateTime<Utc>,
}

impl From<UsuarioRow> for Usuario {
    fn from(r: UsuarioRow) -> Self {
        Usuario::new(
            r.id,
            r.nombre,
            r.apellido,
            r.fecha_registro,
            r.fecha_actualizacion,
        )
    }
}

fn not_found(id: &str) -> AppError {
    AppError::not_found("Usuario not found", json!({ "id": id }))
}

#[async_trait]
impl UsuarioRepository for PgUsuarioRepository {
    async fn list(&self) -> Result<Vec<Usuario>, AppError> {
        let rows = sqlx::query_as::<_, UsuarioRow>(
            r#"
            SELECT id, nombre, apellido, fecha_registro, fecha_actualizacion
            FROM usuarios
            ORDER BY fecha_registro, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Usuario::from).collect())
    }

    async fn create(&self, new_usuario: NewUsuario) -> Result<Usuario, AppError> {
        let now = Utc::now();
        let id = generate_id(now);

        // Both timestamps come from the same NOW() so they are equal.
        let row = sqlx::query_as::<_, UsuarioRow>(
            r#"
            INSERT INTO usuarios (id, nombre, apellido, fecha_registro, fecha_actualizacion)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, nombre, apellido, fecha_registro, fecha_actualizacion
            "#,
        )
        .bind(&id)
        .bind(&new_usuario.nombre)
        .bind(&new_usuario.apellido)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: &str, patch: UsuarioPatch) -> Result<Usuario, AppError> {
        let row = sqlx::query_as::<_, UsuarioRow>(
            r#"
            UPDATE usuarios SET
                nombre              = COALESCE($2::TEXT, nombre),
                apellido            = COALESCE($3::TEXT, apellido),
                fecha_actualizacion = GREATEST(NOW(), fecha_registro)
            WHERE id = $1
            RETURNING id, nombre, apellido, fecha_registro, fecha_actualizacion
            "#,
        )
        .bind(id)
        .bind(patch.nombre)
        .bind(patch.apellido)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Usuario::from).ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: &str) -> Result<Usuario, AppError> {
        let row = sqlx::query_as::<_, UsuarioRow>(
            r#"
            DELETE FROM usuarios
            WHERE id = $1
            RETURNING id, nombre, apellido, fecha_registro, fecha_actualizacion
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Usuario::from).ok_or_else(|| not_found(id))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
