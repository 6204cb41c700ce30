//! Caregiver record payload.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{default_birthdate, DEFAULT_ADDRESS, DEFAULT_GENDER};
use crate::domain::value_objects::{Identity, UserType};

/// Body of `POST /carregivers`.
///
/// A caregiver must be linked to at least one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCaregiver {
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
    #[validate(length(
        min = 1,
        message = "a caregiver needs at least one linked patient"
    ))]
    pub patient_emails: Vec<String>,
}

impl NewCaregiver {
    pub fn new(identity: Identity, password: &str, patient_emails: Vec<String>) -> Self {
        Self {
            cpf: identity.cpf,
            name: identity.name,
            email: identity.email,
            phone: identity.phone,
            password: password.to_string(),
            birthdate: default_birthdate(),
            gender: DEFAULT_GENDER.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            user_type: UserType::Caregiver,
            patient_emails,
        }
    }

    pub fn generate<R: Rng>(rng: &mut R, password: &str, patient_emails: Vec<String>) -> Self {
        Self::new(Identity::generate("Caregiver", rng), password, patient_emails)
    }
}
