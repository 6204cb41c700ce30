//! Command line interface.

use clap::{Parser, Subcommand};

use crate::config::Settings;

#[derive(Debug, Parser)]
#[command(
    name = "care-smoke",
    about = "Smoke-test client for the care management API",
    version
)]
pub struct Cli {
    /// API base URL (overrides configuration)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Administrator email used to log in
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// Administrator password used to log in
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Subcommand)]
pub enum Command {
    /// Create, read and update one record of every kind
    #[default]
    Full,
    /// Log in and create a single administrator
    CreateAdmin,
}

impl Cli {
    /// Apply command line overrides on top of loaded settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.base_url {
            settings.api.base_url = url.clone();
        }
        if let Some(email) = &self.email {
            settings.credentials.email = email.clone();
        }
        if let Some(password) = &self.password {
            settings.credentials.password = password.clone();
        }
    }

    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }
}
