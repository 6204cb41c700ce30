//! # Domain Layer
//!
//! Record payloads and the values they are built from. Nothing in here
//! performs I/O.
//!
//! ## Structure
//!
//! - **entities**: Creation payloads (administrators, doctors, patients, caregivers)
//! - **value_objects**: Account type constant and the identity generator

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
