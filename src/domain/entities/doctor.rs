//! Doctor record payload.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Identity, UserType};

/// Speciality assigned to generated doctors.
pub const DEFAULT_SPECIALITY: &str = "Cardiologista";

/// Body of `POST /doctors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    /// Medical council registration number (6 digits)
    pub crm: String,
    pub speciality: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

impl NewDoctor {
    pub fn new(identity: Identity, password: &str, crm: String) -> Self {
        Self {
            cpf: identity.cpf,
            name: identity.name,
            email: identity.email,
            phone: identity.phone,
            password: password.to_string(),
            crm,
            speciality: DEFAULT_SPECIALITY.to_string(),
            user_type: UserType::Doctor,
        }
    }

    /// Doctor with a generated identity and a random CRM.
    pub fn generate<R: Rng>(rng: &mut R, password: &str) -> Self {
        let identity = Identity::generate("Doctor", rng);
        let crm = rng.random_range(100_000..=999_999u32).to_string();
        Self::new(identity, password, crm)
    }
}
