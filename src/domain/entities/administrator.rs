//! Administrator record payload.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Identity, UserType};

/// Body of `POST /administrators`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdministrator {
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

impl NewAdministrator {
    pub fn new(identity: Identity, password: &str) -> Self {
        Self {
            cpf: identity.cpf,
            name: identity.name,
            email: identity.email,
            phone: identity.phone,
            password: password.to_string(),
            user_type: UserType::Administrator,
        }
    }

    /// Administrator with a freshly generated identity.
    pub fn generate<R: Rng>(rng: &mut R, password: &str) -> Self {
        Self::new(Identity::generate("Admin", rng), password)
    }
}
