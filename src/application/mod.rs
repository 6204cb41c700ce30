//! Application Layer
//!
//! Operations against the remote API and the DTOs they exchange. This layer
//! sits between the CLI and the HTTP plumbing.

pub mod dto;
pub mod services;
