//! Utility functions shared across layers.
//!
//! - [`id_generator`] - Storage id generation and format checks

pub mod id_generator;
