//! Infrastructure Layer
//!
//! Contains the HTTP plumbing used to reach the remote API.

pub mod http;
