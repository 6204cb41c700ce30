//! # Care Smoke Library
//!
//! Smoke-test client for the care management REST API. It logs in, then
//! creates, reads and updates administrators, doctors, patients and
//! caregivers, logging every response for a human to inspect.
//!
//! ## Module Structure
//!
//! ```text
//! care_smoke/
//! +-- config/          Configuration management
//! +-- domain/          Record payloads and the identity generator
//! +-- application/     Per-resource operations and DTOs
//! +-- infrastructure/  HTTP context and the generic request helper
//! +-- presentation/    Command line interface
//! +-- shared/          Errors and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Record payloads
pub mod domain;

// Application layer - API operations
pub mod application;

// Infrastructure layer - HTTP plumbing
pub mod infrastructure;

// Presentation layer - CLI
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and scenarios
pub mod startup;

// Logging
pub mod telemetry;
