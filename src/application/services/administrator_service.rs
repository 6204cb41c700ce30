//! Administrator Service
//!
//! Create, fetch and update operations on `/administrators`.

use reqwest::Method;
use serde_json::Value;

use super::{apply_overlay, to_payload};
use crate::application::dto::UpdateAdministrator;
use crate::domain::NewAdministrator;
use crate::infrastructure::http::{request_entity, ApiContext};
use crate::shared::ClientResult;

/// Collection path
pub const ADMINISTRATORS_PATH: &str = "/administrators";

/// Create an administrator with a generated identity.
pub async fn create_admin(ctx: &ApiContext, token: &str) -> ClientResult<Option<Value>> {
    let admin = NewAdministrator::generate(&mut rand::rng(), ctx.record_password());
    let payload = to_payload(&admin)?;

    request_entity(
        ctx.http(),
        Method::POST,
        &ctx.url(ADMINISTRATORS_PATH),
        Some(token),
        Some(&payload),
        "Administrator",
    )
    .await
}

pub async fn get_admin_by_id(
    ctx: &ApiContext,
    token: &str,
    id: &str,
) -> ClientResult<Option<Value>> {
    request_entity(
        ctx.http(),
        Method::GET,
        &ctx.url(&format!("{}/{}", ADMINISTRATORS_PATH, id)),
        Some(token),
        None,
        "Administrator GET",
    )
    .await
}

/// Fetch the administrator, apply `changes` and PUT the result back.
///
/// Nothing is written if the fetch finds no record.
pub async fn update_admin(
    ctx: &ApiContext,
    token: &str,
    id: &str,
    changes: &UpdateAdministrator,
) -> ClientResult<Option<Value>> {
    let Some(current) = get_admin_by_id(ctx, token, id).await? else {
        return Ok(None);
    };
    let updated = apply_overlay(current, changes)?;

    request_entity(
        ctx.http(),
        Method::PUT,
        &ctx.url(&format!("{}/{}", ADMINISTRATORS_PATH, id)),
        Some(token),
        Some(&updated),
        "Administrator PUT",
    )
    .await
}
