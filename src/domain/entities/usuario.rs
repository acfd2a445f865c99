//! Usuario entity, the single resource managed by the API.

use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};

/// A persisted user record.
///
/// `id` is assigned by storage and never changes. `fecha_registro` is set once
/// at creation; `fecha_actualizacion` starts equal to it and is refreshed on
/// every update, so it is never earlier than `fecha_registro`.
#[derive(Debug, Clone, PartialEq)]
pub struct Usuario {
    pub id: String,
    pub nombre: String,
    pub apellido: String,
    pub fecha_registro: DateTime<Utc>,
    pub fecha_actualizacion: DateTime<Utc>,
}

impl Usuario {
    /// Creates a new Usuario instance.
    pub fn new(
        id: String,
        nombre: String,
        apellido: String,
        fecha_registro: DateTime<Utc>,
        fecha_actualizacion: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            nombre,
            apellido,
            fecha_registro,
            fecha_actualizacion,
        }
    }

    /// Builds a freshly registered record with both timestamps set to `now`.
    pub fn register(id: String, new_usuario: NewUsuario, now: DateTime<Utc>) -> Self {
        Self::new(id, new_usuario.nombre, new_usuario.apellido, now, now)
    }

    /// Applies a partial update and refreshes `fecha_actualizacion`.
    ///
    /// The refreshed timestamp is clamped to `fecha_registro` so a clock step
    /// backwards cannot break the ordering of the two dates.
    pub fn apply_patch(&mut self, patch: UsuarioPatch, now: DateTime<Utc>) {
        if let Some(nombre) = patch.nombre {
            self.nombre = nombre;
        }
        if let Some(apellido) = patch.apellido {
            self.apellido = apellido;
        }
        self.fecha_actualizacion = now.max(self.fecha_registro);
    }
}

/// Input data for creating a new usuario.
///
/// Values are stored exactly as given; only blank values are rejected.
#[derive(Debug, Clone, Validate)]
pub struct NewUsuario {
    #[validate(custom(function = "not_blank", message = "nombre must not be blank"))]
    pub nombre: String,

    #[validate(custom(function = "not_blank", message = "apellido must not be blank"))]
    pub apellido: String,
}

/// Partial update for an existing usuario.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Validate)]
pub struct UsuarioPatch {
    #[validate(custom(function = "not_blank", message = "nombre must not be blank"))]
    pub nombre: Option<String>,

    #[validate(custom(function = "not_blank", message = "apellido must not be blank"))]
    pub apellido: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
