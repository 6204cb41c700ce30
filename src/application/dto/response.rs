//! Response DTOs
//!
//! Only the login response is typed; record bodies stay as `serde_json::Value`
//! so updates can send back fields this client does not know about.

use serde::Deserialize;
use serde_json::Value;

/// Body of a successful `POST /api/auth/login`.
///
/// Every field is optional and loosely typed so that a body without a usable
/// token is reported rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    pub token: Option<Value>,
    pub id: Option<Value>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl LoginResponse {
    /// The bearer token, if the body carries a non-empty string one.
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_ref()
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
    }
}
