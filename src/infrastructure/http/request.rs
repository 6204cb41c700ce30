//! Generic entity request.
//!
//! Every create, read and update in the crate goes through
//! [`request_entity`]. A status other than 200/201 is logged and reported as
//! `Ok(None)`; only transport failures and unreadable success bodies are
//! errors.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::shared::{ClientError, ClientResult};

/// Headers for a request, with `Authorization` only when a token is given.
pub fn build_headers(token: Option<&str>) -> ClientResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ClientError::Validation(format!("token is not a valid header value: {}", e)))?;
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

/// Whether a status counts as success for entity requests.
pub fn is_accepted(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::CREATED
}

/// Send one request and return the JSON body if the server accepted it.
///
/// `label` only tags the log line.
pub async fn request_entity(
    http: &Client,
    method: Method,
    url: &str,
    token: Option<&str>,
    payload: Option<&Value>,
    label: &str,
) -> ClientResult<Option<Value>> {
    let mut request = http
        .request(method.clone(), url)
        .headers(build_headers(token)?);
    if let Some(payload) = payload {
        request = request.json(payload);
    }

    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !is_accepted(status) {
        tracing::warn!(
            label,
            method = %method,
            url,
            status = status.as_u16(),
            body = %body,
            "request rejected"
        );
        return Ok(None);
    }

    tracing::info!(
        label,
        method = %method,
        url,
        status = status.as_u16(),
        body = %body,
        "request accepted"
    );

    Ok(Some(serde_json::from_str(&body)?))
}
