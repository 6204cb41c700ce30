//! # Domain Value Objects
//!
//! Immutable value types shared by every record kind.
//!
//! ## Value Objects
//!
//! - **UserType**: The `type` constant attached to each record
//! - **Identity**: Randomized cpf/email/phone/name tuple

mod identity;
mod user_type;

pub use identity::*;
pub use user_type::*;
