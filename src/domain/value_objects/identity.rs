//! Pseudo-unique identities for generated records.
//!
//! A four digit random suffix keeps repeated runs from reusing the same cpf
//! and email. Nothing detects collisions; the server decides what happens
//! when one occurs.

use rand::Rng;

/// Lowest suffix, inclusive
pub const SUFFIX_MIN: u16 = 1000;

/// Highest suffix, inclusive
pub const SUFFIX_MAX: u16 = 9999;

/// Identifying fields shared by every kind of record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub cpf: String,
    pub email: String,
    pub phone: String,
    pub name: String,
}

impl Identity {
    /// Build the identity for `base_name` and a given suffix.
    pub fn with_suffix(base_name: &str, num: u16) -> Self {
        Self {
            cpf: format!("12345678{num:02}"),
            email: format!("{}{num}@example.com", base_name.to_lowercase()),
            phone: format!("1199{num}9999"),
            name: format!("{base_name} {num}"),
        }
    }

    /// Build an identity with a suffix drawn from `rng`.
    pub fn generate<R: Rng>(base_name: &str, rng: &mut R) -> Self {
        Self::with_suffix(base_name, rng.random_range(SUFFIX_MIN..=SUFFIX_MAX))
    }
}

/// Generate a pseudo-unique identity using the thread-local RNG.
pub fn generate_unique_user(base_name: &str) -> Identity {
    Identity::generate(base_name, &mut rand::rng())
}
