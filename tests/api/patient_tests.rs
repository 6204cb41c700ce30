//! Patient Tests

use pretty_assertions::assert_eq;
use serde_json::json;

use care_smoke::application::dto::UpdatePatient;
use care_smoke::application::services::{
    create_doctor, create_patient, get_patient_by_id, get_patients_by_doctor_id, update_patient,
};

use crate::common::{id_of, TestApp};

/// Doctor -> linked patient -> patients-by-doctor lists it
#[tokio::test]
async fn test_patient_linked_to_doctor_is_listed() {
    let app = TestApp::spawn().await;
    let doctor = create_doctor(&app.ctx, app.token()).await.unwrap().unwrap();
    let doctor_email = doctor["email"].as_str().unwrap().to_string();

    let patient = create_patient(&app.ctx, app.token(), vec![doctor_email.clone()], vec![])
        .await
        .unwrap()
        .expect("patient should be created");
    assert_eq!(patient["doctorEmails"], json!([doctor_email]));
    assert_eq!(patient["type"], "PATIENT");
    assert_eq!(patient["birthdate"], "1940-01-01");

    let listed = get_patients_by_doctor_id(&app.ctx, app.token(), &id_of(&doctor))
        .await
        .unwrap()
        .expect("listing should succeed");
    let ids: Vec<String> = listed.as_array().unwrap().iter().map(id_of).collect();

    assert!(ids.contains(&id_of(&patient)));
}

/// A patient without links is not listed for the doctor
#[tokio::test]
async fn test_unlinked_patient_is_not_listed() {
    let app = TestApp::spawn().await;
    let doctor = create_doctor(&app.ctx, app.token()).await.unwrap().unwrap();
    create_patient(&app.ctx, app.token(), vec![], vec![])
        .await
        .unwrap()
        .unwrap();

    let listed = get_patients_by_doctor_id(&app.ctx, app.token(), &id_of(&doctor))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_update_patient_name_and_links() {
    let app = TestApp::spawn().await;
    let patient = create_patient(
        &app.ctx,
        app.token(),
        vec!["doctor1000@example.com".into()],
        vec!["caregiver1000@example.com".into()],
    )
    .await
    .unwrap()
    .unwrap();
    let id = id_of(&patient);

    update_patient(
        &app.ctx,
        app.token(),
        &id,
        &UpdatePatient {
            name: Some("Paciente Atualizado".into()),
            doctor_emails: Some(vec![]),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("update should be accepted");

    let fetched = get_patient_by_id(&app.ctx, app.token(), &id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched["name"], "Paciente Atualizado");
    assert_eq!(fetched["doctorEmails"], json!([]));
    assert_eq!(fetched["caregiverEmails"], json!(["caregiver1000@example.com"]));
    assert_eq!(fetched["email"], patient["email"]);
}
