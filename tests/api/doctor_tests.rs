//! Doctor Tests

use pretty_assertions::assert_eq;

use care_smoke::application::dto::UpdateDoctor;
use care_smoke::application::services::{create_doctor, get_doctor_by_id, update_doctor};
use care_smoke::domain::DEFAULT_SPECIALITY;

use crate::common::{id_of, TestApp};

#[tokio::test]
async fn test_create_doctor_returns_record_with_id() {
    let app = TestApp::spawn().await;

    let doctor = create_doctor(&app.ctx, app.token())
        .await
        .unwrap()
        .expect("doctor should be created");

    assert!(doctor.get("id").is_some());
    assert_eq!(doctor["type"], "DOCTOR");
    assert_eq!(doctor["speciality"], DEFAULT_SPECIALITY);
    assert_eq!(doctor["crm"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_update_doctor_speciality() {
    let app = TestApp::spawn().await;
    let doctor = create_doctor(&app.ctx, app.token()).await.unwrap().unwrap();
    let id = id_of(&doctor);

    update_doctor(
        &app.ctx,
        app.token(),
        &id,
        &UpdateDoctor {
            speciality: Some("Neurologista".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("update should be accepted");

    let fetched = get_doctor_by_id(&app.ctx, app.token(), &id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched["speciality"], "Neurologista");
    assert_eq!(fetched["crm"], doctor["crm"]);
    assert_eq!(fetched["name"], doctor["name"]);
}

/// Without a valid token the server refuses and nothing is returned
#[tokio::test]
async fn test_create_doctor_with_bad_token_returns_none() {
    let app = TestApp::spawn().await;

    let doctor = create_doctor(&app.ctx, "not-the-token").await.unwrap();

    assert!(doctor.is_none());
    assert!(app.records("doctors").is_empty());
}
