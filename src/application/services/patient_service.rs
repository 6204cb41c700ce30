//! Patient Service
//!
//! Create, fetch and update operations on `/patients`, plus the
//! patients-by-doctor listing.

use reqwest::Method;
use serde_json::Value;

use super::doctor_service::DOCTORS_PATH;
use super::{apply_overlay, to_payload};
use crate::application::dto::UpdatePatient;
use crate::domain::NewPatient;
use crate::infrastructure::http::{request_entity, ApiContext};
use crate::shared::ClientResult;

/// Collection path
pub const PATIENTS_PATH: &str = "/patients";

/// Create a patient linked to the given doctors and caregivers.
pub async fn create_patient(
    ctx: &ApiContext,
    token: &str,
    doctor_emails: Vec<String>,
    caregiver_emails: Vec<String>,
) -> ClientResult<Option<Value>> {
    let patient = NewPatient::generate(
        &mut rand::rng(),
        ctx.record_password(),
        doctor_emails,
        caregiver_emails,
    );
    let payload = to_payload(&patient)?;

    request_entity(
        ctx.http(),
        Method::POST,
        &ctx.url(PATIENTS_PATH),
        Some(token),
        Some(&payload),
        "Patient",
    )
    .await
}

pub async fn get_patient_by_id(ctx: &ApiContext, token: &str, id: &str) -> ClientResult<Option<Value>> {
    request_entity(
        ctx.http(),
        Method::GET,
        &ctx.url(&format!("{}/{}", PATIENTS_PATH, id)),
        Some(token),
        None,
        "Patient GET",
    )
    .await
}

/// List the patients linked to a doctor.
pub async fn get_patients_by_doctor_id(
    ctx: &ApiContext,
    token: &str,
    doctor_id: &str,
) -> ClientResult<Option<Value>> {
    request_entity(
        ctx.http(),
        Method::GET,
        &ctx.url(&format!("{}/{}/patients", DOCTORS_PATH, doctor_id)),
        Some(token),
        None,
        "Doctor patients GET",
    )
    .await
}

/// Fetch the patient, apply `changes` and PUT the result back.
pub async fn update_patient(
    ctx: &ApiContext,
    token: &str,
    id: &str,
    changes: &UpdatePatient,
) -> ClientResult<Option<Value>> {
    let Some(current) = get_patient_by_id(ctx, token, id).await? else {
        return Ok(None);
    };
    let updated = apply_overlay(current, changes)?;

    request_entity(
        ctx.http(),
        Method::PUT,
        &ctx.url(&format!("{}/{}", PATIENTS_PATH, id)),
        Some(token),
        Some(&updated),
        "Patient PUT",
    )
    .await
}
