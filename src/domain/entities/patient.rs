//! Patient record payload.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{default_birthdate, DEFAULT_ADDRESS, DEFAULT_GENDER};
use crate::domain::value_objects::{Identity, UserType};

/// Body of `POST /patients`.
///
/// Doctors and caregivers are linked by email; both lists may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub birthdate: NaiveDate,
    pub gender: String,
    pub address: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub doctor_emails: Vec<String>,
    pub caregiver_emails: Vec<String>,
}

impl NewPatient {
    pub fn new(
        identity: Identity,
        password: &str,
        doctor_emails: Vec<String>,
        caregiver_emails: Vec<String>,
    ) -> Self {
        Self {
            cpf: identity.cpf,
            name: identity.name,
            email: identity.email,
            phone: identity.phone,
            password: password.to_string(),
            birthdate: default_birthdate(),
            gender: DEFAULT_GENDER.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            user_type: UserType::Patient,
            doctor_emails,
            caregiver_emails,
        }
    }

    pub fn generate<R: Rng>(
        rng: &mut R,
        password: &str,
        doctor_emails: Vec<String>,
        caregiver_emails: Vec<String>,
    ) -> Self {
        Self::new(
            Identity::generate("Patient", rng),
            password,
            doctor_emails,
            caregiver_emails,
        )
    }
}
