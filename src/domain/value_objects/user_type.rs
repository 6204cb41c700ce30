//! Account type discriminator sent as the `type` field of every record.

use serde::{Deserialize, Serialize};

/// Account type, serialized the way the API expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserType {
    Administrator,
    Doctor,
    Patient,
    Caregiver,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "ADMINISTRATOR",
            Self::Doctor => "DOCTOR",
            Self::Patient => "PATIENT",
            Self::Caregiver => "CAREGIVER",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
