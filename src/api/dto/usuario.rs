//! DTOs for the usuario endpoints.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::entities::Usuario;

/// Request body for `POST /usuario`.
///
/// `id`, `fecha_registro` and `fecha_actualizacion` are ignored if present;
/// storage assigns them.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUsuarioRequest {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
}

/// Request body for `PUT /usuario/{id}`.
///
/// All fields are optional, only provided fields are changed. An `id` in the
/// body is ignored; the path parameter identifies the record.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUsuarioRequest {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
}

/// Request body for `DELETE /usuario`.
///
/// Unlike update, delete takes the identifier from the body.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteUsuarioRequest {
    pub id: Option<String>,
}

/// JSON representation of a usuario.
#[derive(Debug, Serialize)]
pub struct UsuarioItem {
    pub id: String,
    pub nombre: String,
    pub apellido: String,
    #[serde(serialize_with = "iso_millis")]
    pub fecha_registro: DateTime<Utc>,
    #[serde(serialize_with = "iso_millis")]
    pub fecha_actualizacion: DateTime<Utc>,
}

impl From<Usuario> for UsuarioItem {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre,
            apellido: u.apellido,
            fecha_registro: u.fecha_registro,
            fecha_actualizacion: u.fecha_actualizacion,
        }
    }
}

/// Formats timestamps as `2024-10-31T20:39:05.576Z`.
fn iso_millis<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_usuario_item_serialization() {
        let at = Utc
            .with_ymd_and_hms(2024, 10, 31, 20, 39, 5)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(576))
            .unwrap();
        let usuario = Usuario::new(
            "6723eae9bbe2865d327b979d".to_string(),
            "David".to_string(),
            "Clavijo".to_string(),
            at,
            at,
        );

        let value = serde_json::to_value(UsuarioItem::from(usuario)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "6723eae9bbe2865d327b979d",
                "nombre": "David",
                "apellido": "Clavijo",
                "fecha_registro": "2024-10-31T20:39:05.576Z",
                "fecha_actualizacion": "2024-10-31T20:39:05.576Z"
            })
        );
    }

    #[test]
    fn test_create_request_ignores_storage_fields() {
        let request: CreateUsuarioRequest = serde_json::from_value(json!({
            "id": "ffffffffffffffffffffffff",
            "nombre": "David",
            "apellido": "Clavijo",
            "fecha_registro": "2000-01-01T00:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(request.nombre.as_deref(), Some("David"));
        assert_eq!(request.apellido.as_deref(), Some("Clavijo"));
    }

    #[test]
    fn test_delete_request_without_id() {
        let request: DeleteUsuarioRequest =
            serde_json::from_value(json!({ "nombre": "David" })).unwrap();

        assert!(request.id.is_none());
    }
}
