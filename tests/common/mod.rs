#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use usuarios_api::api::handlers::{health_handler, openapi_handler};
use usuarios_api::api::openapi;
use usuarios_api::api::routes::usuario_routes;
use usuarios_api::application::services::UsuarioService;
use usuarios_api::domain::entities::{NewUsuario, Usuario, UsuarioPatch};
use usuarios_api::domain::repositories::UsuarioRepository;
use usuarios_api::error::AppError;
use usuarios_api::infrastructure::persistence::MemoryUsuarioRepository;
use usuarios_api::state::AppState;

/// Storage that is always unreachable.
pub struct DownRepository;

#[async_trait]
impl UsuarioRepository for DownRepository {
    async fn list(&self) -> Result<Vec<Usuario>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn create(&self, _new_usuario: NewUsuario) -> Result<Usuario, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update(&self, _id: &str, _patch: UsuarioPatch) -> Result<Usuario, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _id: &str) -> Result<Usuario, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_state_with(repository: Arc<dyn UsuarioRepository>) -> AppState {
    let usuario_service = Arc::new(UsuarioService::new(repository));
    let document = openapi::generate(&openapi::Info::for_server("http://localhost:3000"));

    AppState::new(usuario_service, document)
}

pub fn create_test_state() -> AppState {
    create_state_with(Arc::new(MemoryUsuarioRepository::new()))
}

pub fn make_router(state: AppState) -> Router {
    usuario_routes()
        .route("/health", get(health_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
        .with_state(state)
}

pub fn make_server() -> TestServer {
    TestServer::new(make_router(create_test_state())).unwrap()
}

/// Creates a usuario through the API and returns the `data` of the envelope.
pub async fn create_usuario(server: &TestServer, nombre: &str, apellido: &str) -> Value {
    let response = server
        .post("/usuario")
        .json(&json!({ "nombre": nombre, "apellido": apellido }))
        .await;

    response.assert_status_ok();
    response.json::<Value>()["data"].clone()
}

/// Lists usuarios through the API and returns the `data` array.
pub async fn list_usuarios(server: &TestServer) -> Vec<Value> {
    let response = server.get("/usuario").await;

    response.assert_status_ok();
    response.json::<Value>()["data"]
        .as_array()
        .cloned()
        .unwrap_or_default()
}
