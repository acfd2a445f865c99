//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs accept any combination of fields; validation belongs to the
//! service layer so that every rule is reported through the same envelope.

pub mod health;
pub mod usuario;
