//! Generic Request Tests

use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;

use care_smoke::infrastructure::http::{request_entity, ApiContext};
use care_smoke::shared::ClientError;

use crate::common::{TestApp, RECORD_PASSWORD};

/// The Authorization header is sent only when a token is supplied
#[tokio::test]
async fn test_authorization_header_iff_token() {
    let app = TestApp::spawn().await;
    let url = app.ctx.url("/administrators/1");

    request_entity(app.ctx.http(), Method::GET, &url, None, None, "anonymous")
        .await
        .unwrap();
    request_entity(
        app.ctx.http(),
        Method::GET,
        &url,
        Some(app.token()),
        None,
        "authenticated",
    )
    .await
    .unwrap();

    let requests = app.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].authorization.is_none());
    assert_eq!(
        requests[1].authorization.as_deref(),
        Some(format!("Bearer {}", app.token()).as_str())
    );
}

/// 201 Created returns the parsed body
#[tokio::test]
async fn test_created_returns_body() {
    let app = TestApp::spawn().await;
    let payload = json!({"name": "Admin 1000", "type": "ADMINISTRATOR"});

    let created = request_entity(
        app.ctx.http(),
        Method::POST,
        &app.ctx.url("/administrators"),
        Some(app.token()),
        Some(&payload),
        "Administrator",
    )
    .await
    .unwrap()
    .expect("record should be created");

    assert_eq!(created["name"], "Admin 1000");
    assert!(created.get("id").is_some());
}

/// Statuses other than 200/201 come back as None
#[tokio::test]
async fn test_rejected_request_returns_none() {
    let app = TestApp::spawn().await;

    let forbidden = request_entity(
        app.ctx.http(),
        Method::POST,
        &app.ctx.url("/doctors"),
        None,
        Some(&json!({"name": "Doctor 1000"})),
        "Doctor",
    )
    .await
    .unwrap();
    let missing = request_entity(
        app.ctx.http(),
        Method::GET,
        &app.ctx.url("/doctors/999"),
        Some(app.token()),
        None,
        "Doctor GET",
    )
    .await
    .unwrap();

    assert!(forbidden.is_none());
    assert!(missing.is_none());
    assert!(app.records("doctors").is_empty());
}

/// An unreachable server is a transport error, not an absence
#[tokio::test]
async fn test_unreachable_server_is_an_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let ctx = ApiContext::new(&format!("http://{}", address), RECORD_PASSWORD).unwrap();
    let result = request_entity(
        ctx.http(),
        Method::GET,
        &ctx.url("/doctors/1"),
        None,
        None,
        "Doctor GET",
    )
    .await;

    assert!(matches!(result, Err(ClientError::Http(_))));
}
