//! Authentication Service
//!
//! Exchanges administrator credentials for the bearer token used by every
//! other request of the run.

use reqwest::StatusCode;

use crate::application::dto::{LoginRequest, LoginResponse};
use crate::infrastructure::http::{build_headers, ApiContext};
use crate::shared::ClientResult;

/// Path of the login endpoint
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Log in and return the bearer token.
///
/// Returns `Ok(None)` when the server answers with anything but 200, or
/// answers 200 without a token. There is no retry.
pub async fn login(ctx: &ApiContext, credentials: &LoginRequest) -> ClientResult<Option<String>> {
    let url = ctx.url(LOGIN_PATH);

    let response = ctx
        .http()
        .post(&url)
        .headers(build_headers(None)?)
        .json(credentials)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        tracing::warn!(
            email = %credentials.email,
            status = status.as_u16(),
            body = %body,
            "login request failed"
        );
        return Ok(None);
    }

    let login: LoginResponse = serde_json::from_str(&body)?;
    match login.token() {
        Some(token) => {
            tracing::info!(
                email = login.email.as_deref().unwrap_or(credentials.email.as_str()),
                user_id = ?login.id,
                role = login.role.as_deref().unwrap_or("unknown"),
                "login succeeded"
            );
            Ok(Some(token.to_string()))
        }
        None => {
            tracing::warn!(email = %credentials.email, body = %body, "login returned no token");
            Ok(None)
        }
    }
}
