//! # Domain Entities
//!
//! Request payloads for the four record kinds the API manages. They are
//! built, sent once and dropped; the client never stores them.
//!
//! - **NewAdministrator**: platform administrator
//! - **NewDoctor**: doctor with CRM and speciality
//! - **NewPatient**: patient linked to doctors and caregivers by email
//! - **NewCaregiver**: caregiver linked to at least one patient by email

use chrono::NaiveDate;

mod administrator;
mod caregiver;
mod doctor;
mod patient;

pub use administrator::NewAdministrator;
pub use caregiver::NewCaregiver;
pub use doctor::{NewDoctor, DEFAULT_SPECIALITY};
pub use patient::NewPatient;

/// Gender assigned to generated patients and caregivers.
pub const DEFAULT_GENDER: &str = "M";

/// Address assigned to generated patients and caregivers.
pub const DEFAULT_ADDRESS: &str = "Rua das Flores, 123";

/// Birthdate assigned to generated patients and caregivers (1940-01-01).
pub fn default_birthdate() -> NaiveDate {
    NaiveDate::from_ymd_opt(1940, 1, 1).unwrap_or_default()
}
