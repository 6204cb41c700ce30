//! HTTP Module
//!
//! The shared connection context and the single request helper used by
//! every service.

mod context;
mod request;

pub use context::ApiContext;
pub use request::{build_headers, is_accepted, request_entity};
