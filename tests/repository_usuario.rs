//! PostgreSQL repository tests.
//!
//! Run with a database available:
//! `DATABASE_URL=postgres://... cargo test --test repository_usuario -- --ignored`

use sqlx::PgPool;
use std::sync::Arc;
use usuarios_api::domain::entities::{NewUsuario, UsuarioPatch};
use usuarios_api::domain::repositories::UsuarioRepository;
use usuarios_api::error::AppError;
use usuarios_api::infrastructure::persistence::PgUsuarioRepository;

fn new_usuario(nombre: &str, apellido: &str) -> NewUsuario {
    NewUsuario {
        nombre: nombre.to_string(),
        apellido: apellido.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_usuario(pool: PgPool) {
    let repo = PgUsuarioRepository::new(Arc::new(pool));

    let result = repo.create(new_usuario("David", "Clavijo")).await;

    assert!(result.is_ok());
    let usuario = result.unwrap();
    assert_eq!(usuario.id.len(), 24);
    assert_eq!(usuario.nombre, "David");
    assert_eq!(usuario.apellido, "Clavijo");
    assert_eq!(usuario.fecha_registro, usuario.fecha_actualizacion);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_usuarios(pool: PgPool) {
    let repo = PgUsuarioRepository::new(Arc::new(pool));

    let first = repo.create(new_usuario("Ana", "Perez")).await.unwrap();
    let second = repo.create(new_usuario("Luis", "Gomez")).await.unwrap();

    let list = repo.list().await.unwrap();

    assert_eq!(list.len(), 2);
    assert!(list.contains(&first));
    assert!(list.contains(&second));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_usuario(pool: PgPool) {
    let repo = PgUsuarioRepository::new(Arc::new(pool));
    let created = repo.create(new_usuario("David", "Clavijo")).await.unwrap();

    let updated = repo
        .update(
            &created.id,
            UsuarioPatch {
                nombre: None,
                apellido: Some("Santacruz".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.nombre, "David");
    assert_eq!(updated.apellido, "Santacruz");
    assert_eq!(updated.fecha_registro, created.fecha_registro);
    assert!(updated.fecha_actualizacion >= updated.fecha_registro);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_not_found(pool: PgPool) {
    let repo = PgUsuarioRepository::new(Arc::new(pool));

    let result = repo
        .update("6723eae9bbe2865d327b979d", UsuarioPatch::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_usuario(pool: PgPool) {
    let repo = PgUsuarioRepository::new(Arc::new(pool));
    let created = repo.create(new_usuario("David", "Clavijo")).await.unwrap();

    let deleted = repo.delete(&created.id).await.unwrap();
    assert_eq!(deleted, created);

    assert!(repo.list().await.unwrap().is_empty());

    let again = repo.delete(&created.id).await;
    assert!(matches!(again, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_health_check(pool: PgPool) {
    let repo = PgUsuarioRepository::new(Arc::new(pool));

    assert!(repo.health_check().await);
}
