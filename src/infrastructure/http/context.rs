//! Connection context shared by every request of a run.

use reqwest::Client;

use crate::config::Settings;
use crate::shared::ClientResult;

/// Where to send requests and what to put in generated records.
///
/// Holds one `reqwest::Client` for the whole run. No timeout is configured:
/// a request waits for as long as the server takes.
#[derive(Debug, Clone)]
pub struct ApiContext {
    http: Client,
    base_url: String,
    record_password: String,
}

impl ApiContext {
    /// Create a context for `base_url`.
    pub fn new(base_url: &str, record_password: &str) -> ClientResult<Self> {
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            record_password: record_password.to_string(),
        })
    }

    /// Create a context from loaded settings.
    pub fn from_settings(settings: &Settings) -> ClientResult<Self> {
        Self::new(settings.base_url(), &settings.identity.default_password)
    }

    /// Absolute URL for an API path such as `/doctors/3`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Password given to every record this client creates.
    pub fn record_password(&self) -> &str {
        &self.record_password
    }
}
