//! OpenAPI 3.0 document describing the usuario API.
//!
//! The document is assembled once at startup from [`Info`] and served by
//! [`crate::api::handlers::openapi_handler`]. The admin CLI prints the same
//! document.

use serde_json::{Value, json};

/// Top-level API info for the document.
#[derive(Debug, Clone)]
pub struct Info {
    pub title: String,
    pub version: String,
    pub description: String,
    pub contact_name: String,
    pub contact_email: String,
    /// Base URL clients use to reach the service.
    pub server_url: String,
}

impl Info {
    /// Info for this service, served from `server_url`.
    pub fn for_server(server_url: impl Into<String>) -> Self {
        Self {
            title: "CRUD - Usuarios".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Documentacion de los métodos HTTP utilizados en el contexto de las API´s que gestionan usuarios.".to_string(),
            contact_name: "Luis David Clavijo Santacruz".to_string(),
            contact_email: "luis.cs99.dc@gmail.com".to_string(),
            server_url: server_url.into(),
        }
    }
}

const USUARIO_REF: &str = "#/components/schemas/Usuario";

fn envelope_ok(data: Value) -> Value {
    json!({
        "type": "object",
        "properties": {
            "statusCode": { "type": "integer", "example": 200 },
            "data": data
        }
    })
}

fn ok_response(description: &str, data: Value) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": envelope_ok(data) }
        }
    })
}

fn bad_request() -> Value {
    json!({
        "description": "Bad Request",
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/ErrorResponse" }
            }
        }
    })
}

fn json_body(schema: Value) -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": { "schema": schema }
        }
    })
}

fn schemas() -> Value {
    let name = |description: &str| {
        json!({
            "type": "string",
            "minLength": 1,
            "description": description
        })
    };

    json!({
        "Usuario": {
            "type": "object",
            "required": ["nombre", "apellido"],
            "properties": {
                "id": {
                    "type": "string",
                    "readOnly": true,
                    "description": "Identificador generado por el almacenamiento para el Usuario"
                },
                "nombre": name("Nombre del Usuario"),
                "apellido": name("Apellido del Usuario"),
                "fecha_registro": {
                    "type": "string",
                    "format": "date-time",
                    "readOnly": true,
                    "description": "Fecha de registro del Usuario"
                },
                "fecha_actualizacion": {
                    "type": "string",
                    "format": "date-time",
                    "readOnly": true,
                    "description": "Fecha de actualizacion del Usuario"
                }
            },
            "example": {
                "id": "6723eae9bbe2865d327b979d",
                "nombre": "David",
                "apellido": "Clavijo",
                "fecha_registro": "2024-10-31T20:39:05.576Z",
                "fecha_actualizacion": "2024-10-31T20:39:05.576Z"
            }
        },
        "UsuarioPatch": {
            "type": "object",
            "properties": {
                "nombre": name("Nuevo nombre del Usuario"),
                "apellido": name("Nuevo apellido del Usuario")
            }
        },
        "UsuarioId": {
            "type": "object",
            "required": ["id"],
            "properties": {
                "id": { "type": "string", "example": "6723eae9bbe2865d327b979d" }
            }
        },
        "ErrorResponse": {
            "type": "object",
            "properties": {
                "statusCode": { "type": "integer", "example": 400 },
                "error": {
                    "type": "object",
                    "properties": {
                        "code": {
                            "type": "string",
                            "enum": ["validation_error", "not_found", "bad_request", "internal_error"]
                        },
                        "message": { "type": "string" },
                        "details": { "type": "object" }
                    }
                }
            }
        }
    })
}

/// Builds the OpenAPI document.
pub fn generate(info: &Info) -> Value {
    let usuario = json!({ "$ref": USUARIO_REF });
    let tags = json!(["Usuario"]);

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": info.title,
            "version": info.version,
            "description": info.description,
            "contact": {
                "name": info.contact_name,
                "email": info.contact_email
            }
        },
        "servers": [
            { "url": info.server_url, "description": "Servidor de desarrollo" }
        ],
        "tags": [
            { "name": "Usuario", "description": "Metodos Http para la gestion de usuarios" }
        ],
        "paths": {
            "/usuario": {
                "get": {
                    "summary": "Obtiene la lista de todos los usuarios registrados en el sistema",
                    "tags": tags,
                    "responses": {
                        "200": ok_response(
                            "Lista de usuarios obtenida exitosamente.",
                            json!({ "type": "array", "items": usuario })
                        ),
                        "400": bad_request()
                    }
                },
                "post": {
                    "summary": "Registra un nuevo usuario dentro del sistema",
                    "tags": tags,
                    "requestBody": json_body(usuario.clone()),
                    "responses": {
                        "200": ok_response("Usuario creado exitosamente.", usuario.clone()),
                        "400": bad_request()
                    }
                },
                "delete": {
                    "summary": "Elimina un usuario del registro",
                    "tags": tags,
                    "requestBody": json_body(json!({ "$ref": "#/components/schemas/UsuarioId" })),
                    "responses": {
                        "200": ok_response("Usuario eliminado exitosamente.", usuario.clone()),
                        "400": bad_request()
                    }
                }
            },
            "/usuario/{id}": {
                "put": {
                    "summary": "Actualiza el usuario con el id",
                    "tags": tags,
                    "parameters": [
                        {
                            "in": "path",
                            "name": "id",
                            "required": true,
                            "schema": { "type": "string" },
                            "description": "El id del Usuario"
                        }
                    ],
                    "requestBody": json_body(json!({ "$ref": "#/components/schemas/UsuarioPatch" })),
                    "responses": {
                        "200": ok_response("Usuario actualizado exitosamente.", usuario.clone()),
                        "400": bad_request()
                    }
                }
            }
        },
        "components": {
            "schemas": schemas()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_header() {
        let doc = generate(&Info::for_server("http://localhost:3000"));

        assert_eq!(doc["openapi"], "3.0.0");
        assert_eq!(doc["info"]["title"], "CRUD - Usuarios");
        assert_eq!(doc["info"]["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(doc["servers"][0]["url"], "http://localhost:3000");
    }

    #[test]
    fn test_document_operations() {
        let doc = generate(&Info::for_server("http://localhost:3000"));
        let paths = &doc["paths"];

        for method in ["get", "post", "delete"] {
            assert!(paths["/usuario"][method].is_object(), "missing {method}");
            assert!(paths["/usuario"][method]["responses"]["400"].is_object());
        }
        assert!(paths["/usuario/{id}"]["put"].is_object());
        assert!(paths["/usuario/{id}"]["delete"].is_null());
    }

    #[test]
    fn test_usuario_schema_required_fields() {
        let doc = generate(&Info::for_server("http://localhost:3000"));
        let usuario = &doc["components"]["schemas"]["Usuario"];

        assert_eq!(usuario["required"], json!(["nombre", "apellido"]));
        assert_eq!(usuario["example"]["nombre"], "David");
    }
}
