//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats every
//! outcome through the response envelope.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`openapi`] - OpenAPI document describing the API
//! - [`response`] - Uniform success/error envelope
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod response;
pub mod routes;
