//! Caregiver Service
//!
//! Create, fetch and update operations on caregivers. The server spells the
//! collection `/carregivers`.

use reqwest::Method;
use serde_json::Value;
use validator::Validate;

use super::{apply_overlay, to_payload};
use crate::application::dto::UpdateCaregiver;
use crate::domain::NewCaregiver;
use crate::infrastructure::http::{request_entity, ApiContext};
use crate::shared::validation::validation_error;
use crate::shared::ClientResult;

/// Collection path
pub const CAREGIVERS_PATH: &str = "/carregivers";

/// Create a caregiver linked to the given patients.
///
/// An empty patient list is refused before anything is sent.
pub async fn create_caregiver(
    ctx: &ApiContext,
    token: &str,
    patient_emails: Vec<String>,
) -> ClientResult<Option<Value>> {
    let caregiver = NewCaregiver::generate(&mut rand::rng(), ctx.record_password(), patient_emails);

    if let Err(errors) = caregiver.validate() {
        let err = validation_error(errors);
        tracing::error!(error = %err, "caregiver not created");
        return Ok(None);
    }

    let payload = to_payload(&caregiver)?;
    request_entity(
        ctx.http(),
        Method::POST,
        &ctx.url(CAREGIVERS_PATH),
        Some(token),
        Some(&payload),
        "Caregiver",
    )
    .await
}

pub async fn get_caregiver_by_id(ctx: &ApiContext, token: &str, id: &str) -> ClientResult<Option<Value>> {
    request_entity(
        ctx.http(),
        Method::GET,
        &ctx.url(&format!("{}/{}", CAREGIVERS_PATH, id)),
        Some(token),
        None,
        "Caregiver GET",
    )
    .await
}

/// Fetch the caregiver, apply `changes` and PUT the result back.
pub async fn update_caregiver(
    ctx: &ApiContext,
    token: &str,
    id: &str,
    changes: &UpdateCaregiver,
) -> ClientResult<Option<Value>> {
    let Some(current) = get_caregiver_by_id(ctx, token, id).await? else {
        return Ok(None);
    };
    let updated = apply_overlay(current, changes)?;

    request_entity(
        ctx.http(),
        Method::PUT,
        &ctx.url(&format!("{}/{}", CAREGIVERS_PATH, id)),
        Some(token),
        Some(&updated),
        "Caregiver PUT",
    )
    .await
}
