//! Doctor Service
//!
//! Create, fetch and update operations on `/doctors`.

use reqwest::Method;
use serde_json::Value;

use super::{apply_overlay, to_payload};
use crate::application::dto::UpdateDoctor;
use crate::domain::NewDoctor;
use crate::infrastructure::http::{request_entity, ApiContext};
use crate::shared::ClientResult;

/// Collection path
pub const DOCTORS_PATH: &str = "/doctors";

/// Create a doctor with a generated identity and CRM.
pub async fn create_doctor(ctx: &ApiContext, token: &str) -> ClientResult<Option<Value>> {
    let doctor = NewDoctor::generate(&mut rand::rng(), ctx.record_password());
    let payload = to_payload(&doctor)?;

    request_entity(
        ctx.http(),
        Method::POST,
        &ctx.url(DOCTORS_PATH),
        Some(token),
        Some(&payload),
        "Doctor",
    )
    .await
}

pub async fn get_doctor_by_id(ctx: &ApiContext, token: &str, id: &str) -> ClientResult<Option<Value>> {
    request_entity(
        ctx.http(),
        Method::GET,
        &ctx.url(&format!("{}/{}", DOCTORS_PATH, id)),
        Some(token),
        None,
        "Doctor GET",
    )
    .await
}

/// Fetch the doctor, apply `changes` and PUT the result back.
pub async fn update_doctor(
    ctx: &ApiContext,
    token: &str,
    id: &str,
    changes: &UpdateDoctor,
) -> ClientResult<Option<Value>> {
    let Some(current) = get_doctor_by_id(ctx, token, id).await? else {
        return Ok(None);
    };
    let updated = apply_overlay(current, changes)?;

    request_entity(
        ctx.http(),
        Method::PUT,
        &ctx.url(&format!("{}/{}", DOCTORS_PATH, id)),
        Some(token),
        Some(&updated),
        "Doctor PUT",
    )
    .await
}
