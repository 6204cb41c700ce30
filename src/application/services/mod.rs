//! Application Services
//!
//! One module per resource collection. Each operation is a plain async
//! function over an [`ApiContext`](crate::infrastructure::http::ApiContext)
//! and the bearer token; all of them go through
//! [`request_entity`](crate::infrastructure::http::request_entity).
//!
//! ## Available Services
//!
//! - **auth_service**: Login and bearer token retrieval
//! - **administrator_service**: `/administrators`
//! - **doctor_service**: `/doctors`
//! - **patient_service**: `/patients` and `/doctors/{id}/patients`
//! - **caregiver_service**: `/carregivers`

pub mod administrator_service;
pub mod auth_service;
pub mod caregiver_service;
pub mod doctor_service;
pub mod patient_service;

use serde::Serialize;
use serde_json::Value;

use crate::application::dto::Overlay;
use crate::shared::{ClientError, ClientResult};

pub use administrator_service::{create_admin, get_admin_by_id, update_admin};
pub use auth_service::login;
pub use caregiver_service::{create_caregiver, get_caregiver_by_id, update_caregiver};
pub use doctor_service::{create_doctor, get_doctor_by_id, update_doctor};
pub use patient_service::{
    create_patient, get_patient_by_id, get_patients_by_doctor_id, update_patient,
};

/// Serialize a payload struct into the JSON body sent to the API.
fn to_payload<T: Serialize>(payload: &T) -> ClientResult<Value> {
    Ok(serde_json::to_value(payload)?)
}

/// Apply `changes` to a fetched record.
fn apply_overlay<O: Overlay>(mut current: Value, changes: &O) -> ClientResult<Value> {
    match current.as_object_mut() {
        Some(record) => changes.overlay(record),
        None => {
            return Err(ClientError::UnexpectedBody(format!(
                "expected a JSON object, got {}",
                current
            )))
        }
    }
    Ok(current)
}

/// The `id` of a returned record, as used in URLs.
///
/// The API answers with numeric ids; strings are accepted as well.
pub fn record_id(record: &Value) -> ClientResult<String> {
    match record.get("id") {
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(ClientError::MissingField("id".into())),
    }
}

/// A string field of a returned record.
pub fn record_str(record: &Value, field: &str) -> ClientResult<String> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ClientError::MissingField(field.into()))
}
