//! # Configuration Module
//!
//! This module handles client configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use care_smoke::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Targeting {}", settings.api.base_url);
//! ```

mod settings;

pub use settings::*;
