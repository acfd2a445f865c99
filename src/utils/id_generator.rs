//! Usuario id generation.
//!
//! Ids are 24 lowercase hex characters: 4 bytes of big-endian unix seconds
//! followed by 8 random bytes. Ids generated in later seconds sort after
//! earlier ones.

use chrono::{DateTime, Utc};

/// Length of an id in hex characters.
pub const ID_LENGTH: usize = 24;

const RANDOM_BYTES: usize = 8;

/// Generates a new id stamped with `now`.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_id(now: DateTime<Utc>) -> String {
    let mut buffer = [0u8; 4 + RANDOM_BYTES];

    // Truncation to u32 is the intended wraparound of the timestamp prefix.
    let seconds = now.timestamp() as u32;
    buffer[..4].copy_from_slice(&seconds.to_be_bytes());

    getrandom::fill(&mut buffer[4..]).expect("Failed to generate random bytes");

    hex::encode(buffer)
}

/// Returns true if `id` has the shape produced by [`generate_id`].
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LENGTH && id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}
