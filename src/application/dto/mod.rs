//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{
    LoginRequest, Overlay, UpdateAdministrator, UpdateCaregiver, UpdateDoctor, UpdatePatient,
};
pub use response::LoginResponse;
