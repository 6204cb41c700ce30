//! Request DTOs
//!
//! Login body and the partial changes accepted by update operations.

use serde::Serialize;
use serde_json::{Map, Value};

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Fields an update may overwrite on a fetched record.
///
/// Only supplied fields are written; everything else in the record is sent
/// back unchanged.
pub trait Overlay {
    fn overlay(&self, record: &mut Map<String, Value>);
}

/// Write a scalar field if supplied. Empty strings count as not supplied.
fn set_text(record: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        record.insert(key.to_string(), Value::String(value.to_string()));
    }
}

/// Write a list field if supplied, even when empty.
fn set_list(record: &mut Map<String, Value>, key: &str, value: &Option<Vec<String>>) {
    if let Some(values) = value {
        record.insert(
            key.to_string(),
            Value::Array(values.iter().cloned().map(Value::String).collect()),
        );
    }
}

/// Changes for `PUT /administrators/{id}`
#[derive(Debug, Clone, Default)]
pub struct UpdateAdministrator {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Overlay for UpdateAdministrator {
    fn overlay(&self, record: &mut Map<String, Value>) {
        set_text(record, "name", &self.name);
        set_text(record, "email", &self.email);
    }
}

/// Changes for `PUT /doctors/{id}`
#[derive(Debug, Clone, Default)]
pub struct UpdateDoctor {
    pub name: Option<String>,
    pub email: Option<String>,
    pub speciality: Option<String>,
}

impl Overlay for UpdateDoctor {
    fn overlay(&self, record: &mut Map<String, Value>) {
        set_text(record, "name", &self.name);
        set_text(record, "email", &self.email);
        set_text(record, "speciality", &self.speciality);
    }
}

/// Changes for `PUT /patients/{id}`
#[derive(Debug, Clone, Default)]
pub struct UpdatePatient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub doctor_emails: Option<Vec<String>>,
    pub caregiver_emails: Option<Vec<String>>,
}

impl Overlay for UpdatePatient {
    fn overlay(&self, record: &mut Map<String, Value>) {
        set_text(record, "name", &self.name);
        set_text(record, "email", &self.email);
        set_list(record, "doctorEmails", &self.doctor_emails);
        set_list(record, "caregiverEmails", &self.caregiver_emails);
    }
}

/// Changes for `PUT /carregivers/{id}`
#[derive(Debug, Clone, Default)]
pub struct UpdateCaregiver {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Overlay for UpdateCaregiver {
    fn overlay(&self, record: &mut Map<String, Value>) {
        set_text(record, "name", &self.name);
        set_text(record, "email", &self.email);
    }
}
