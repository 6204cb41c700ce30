//! Administrator Tests

use axum::http::Method;
use pretty_assertions::assert_eq;

use care_smoke::application::dto::UpdateAdministrator;
use care_smoke::application::services::{create_admin, get_admin_by_id, update_admin};

use crate::common::{id_of, TestApp, RECORD_PASSWORD};

#[tokio::test]
async fn test_create_admin_returns_record_with_id() {
    let app = TestApp::spawn().await;

    let admin = create_admin(&app.ctx, app.token())
        .await
        .unwrap()
        .expect("administrator should be created");

    assert!(admin.get("id").is_some());
    assert_eq!(admin["type"], "ADMINISTRATOR");
    assert_eq!(admin["password"], RECORD_PASSWORD);
    assert!(admin["email"].as_str().unwrap().starts_with("admin"));
}

#[tokio::test]
async fn test_get_admin_by_id() {
    let app = TestApp::spawn().await;
    let admin = create_admin(&app.ctx, app.token()).await.unwrap().unwrap();

    let fetched = get_admin_by_id(&app.ctx, app.token(), &id_of(&admin))
        .await
        .unwrap();

    assert_eq!(fetched, Some(admin));
}

/// Only the supplied field changes; the rest is sent back as fetched
#[tokio::test]
async fn test_update_admin_overlays_supplied_fields() {
    let app = TestApp::spawn().await;
    let admin = create_admin(&app.ctx, app.token()).await.unwrap().unwrap();

    let updated = update_admin(
        &app.ctx,
        app.token(),
        &id_of(&admin),
        &UpdateAdministrator {
            name: Some("Administrador Atualizado".into()),
            email: None,
        },
    )
    .await
    .unwrap()
    .expect("update should be accepted");

    assert_eq!(updated["name"], "Administrador Atualizado");
    assert_eq!(updated["email"], admin["email"]);
    assert_eq!(updated["cpf"], admin["cpf"]);
    assert_eq!(app.records("administrators")[0]["name"], "Administrador Atualizado");
}

/// No record, no write
#[tokio::test]
async fn test_update_missing_admin_performs_no_write() {
    let app = TestApp::spawn().await;

    let result = update_admin(
        &app.ctx,
        app.token(),
        "404",
        &UpdateAdministrator {
            name: Some("Ghost".into()),
            email: None,
        },
    )
    .await
    .unwrap();

    assert!(result.is_none());
    assert_eq!(app.count(Method::GET), 1);
    assert_eq!(app.count(Method::PUT), 0);
}
