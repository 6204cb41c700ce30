//! Application Startup
//!
//! Builds the API context from settings and runs the requested scenario.
//! Every step awaits its request before the next one starts.

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{info, warn};

use crate::application::dto::{
    LoginRequest, UpdateAdministrator, UpdateCaregiver, UpdateDoctor, UpdatePatient,
};
use crate::application::services::{self, record_id, record_str};
use crate::config::Settings;
use crate::infrastructure::http::ApiContext;
use crate::presentation::Command;

/// Number of patients the walkthrough links to its doctor
pub const WALKTHROUGH_PATIENTS: usize = 3;

/// Ids and results collected by a full walkthrough.
#[derive(Debug, Clone)]
pub struct Walkthrough {
    /// `None` if the server refused the administrator
    pub admin_id: Option<String>,
    pub doctor_id: String,
    pub doctor_email: String,
    /// Every created patient, in creation order
    pub patient_ids: Vec<String>,
    /// `None` if the server refused the caregiver
    pub caregiver_id: Option<String>,
    /// Body of `GET /doctors/{id}/patients`, if the server answered
    pub doctor_patients: Option<Value>,
    /// Number of updates the server accepted
    pub updates_accepted: usize,
}

/// Application instance
pub struct Application {
    ctx: ApiContext,
    settings: Settings,
}

impl Application {
    /// Build the application from settings
    pub fn build(settings: Settings) -> Result<Self> {
        let ctx = ApiContext::from_settings(&settings).context("failed to create HTTP client")?;
        info!(base_url = %ctx.base_url(), "API context ready");

        Ok(Self { ctx, settings })
    }

    /// Run a command. A failed login ends the run without an error.
    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Full => {
                if let Some(walkthrough) = self.run_walkthrough().await? {
                    info!(
                        admin_id = ?walkthrough.admin_id,
                        doctor_id = %walkthrough.doctor_id,
                        patients = walkthrough.patient_ids.len(),
                        caregiver_id = ?walkthrough.caregiver_id,
                        updates_accepted = walkthrough.updates_accepted,
                        "Walkthrough finished"
                    );
                }
            }
            Command::CreateAdmin => {
                if let Some(admin) = self.create_single_admin().await? {
                    info!(admin = %admin, "Administrator created");
                }
            }
        }
        Ok(())
    }

    /// Log in with the configured credentials.
    pub async fn authenticate(&self) -> Result<Option<String>> {
        let credentials = LoginRequest::new(
            &self.settings.credentials.email,
            &self.settings.credentials.password,
        );
        Ok(services::login(&self.ctx, &credentials).await?)
    }

    /// Log in and create one administrator.
    pub async fn create_single_admin(&self) -> Result<Option<Value>> {
        let Some(token) = self.authenticate().await? else {
            return Ok(None);
        };
        Ok(services::create_admin(&self.ctx, &token).await?)
    }

    /// Log in, then create, read and update one record of every kind.
    ///
    /// Returns `Ok(None)` if login fails. A refused administrator or
    /// caregiver only skips the later steps that need its id. The doctor and
    /// patients are linked into later payloads, so losing one of them ends
    /// the run with an error.
    pub async fn run_walkthrough(&self) -> Result<Option<Walkthrough>> {
        let ctx = &self.ctx;
        let Some(token) = self.authenticate().await? else {
            return Ok(None);
        };

        info!("Creating administrator");
        let admin_id = match services::create_admin(ctx, &token).await? {
            Some(admin) => Some(record_id(&admin)?),
            None => {
                warn!("administrator was not created, its update will be skipped");
                None
            }
        };

        info!("Creating doctor");
        let doctor = services::create_doctor(ctx, &token)
            .await?
            .context("doctor was not created")?;
        let doctor_id = record_id(&doctor)?;
        let doctor_email = record_str(&doctor, "email")?;

        info!("Creating patients");
        let mut patient_ids = Vec::with_capacity(WALKTHROUGH_PATIENTS);
        let mut patient_email = None;
        for _ in 0..WALKTHROUGH_PATIENTS {
            let patient = services::create_patient(ctx, &token, vec![doctor_email.clone()], vec![])
                .await?
                .context("patient was not created")?;
            patient_ids.push(record_id(&patient)?);
            patient_email = Some(record_str(&patient, "email")?);
        }
        let patient_id = patient_ids
            .last()
            .cloned()
            .context("no patient was created")?;
        let patient_email = patient_email.context("no patient was created")?;

        info!("Creating caregiver");
        let caregiver_id = match services::create_caregiver(ctx, &token, vec![patient_email]).await? {
            Some(caregiver) => Some(record_id(&caregiver)?),
            None => {
                warn!("caregiver was not created, its read and update will be skipped");
                None
            }
        };

        info!("Reading records back");
        services::get_patient_by_id(ctx, &token, &patient_id).await?;
        services::get_doctor_by_id(ctx, &token, &doctor_id).await?;
        let doctor_patients = services::get_patients_by_doctor_id(ctx, &token, &doctor_id).await?;
        if let Some(caregiver_id) = &caregiver_id {
            services::get_caregiver_by_id(ctx, &token, caregiver_id).await?;
        }

        info!("Updating records");
        let mut updates = vec![
            services::update_patient(
                ctx,
                &token,
                &patient_id,
                &UpdatePatient {
                    name: Some("Paciente Atualizado".into()),
                    ..Default::default()
                },
            )
            .await?,
            services::update_doctor(
                ctx,
                &token,
                &doctor_id,
                &UpdateDoctor {
                    speciality: Some("Neurologista".into()),
                    ..Default::default()
                },
            )
            .await?,
        ];
        if let Some(caregiver_id) = &caregiver_id {
            let changes = UpdateCaregiver {
                name: Some("Cuidador Atualizado".into()),
                ..Default::default()
            };
            updates.push(services::update_caregiver(ctx, &token, caregiver_id, &changes).await?);
        }
        if let Some(admin_id) = &admin_id {
            let changes = UpdateAdministrator {
                name: Some("Administrador Atualizado".into()),
                ..Default::default()
            };
            updates.push(services::update_admin(ctx, &token, admin_id, &changes).await?);
        }
        let updates_accepted = updates.iter().filter(|u| u.is_some()).count();

        Ok(Some(Walkthrough {
            admin_id,
            doctor_id,
            doctor_email,
            patient_ids,
            caregiver_id,
            doctor_patients,
            updates_accepted,
        }))
    }
}
