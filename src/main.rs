//! # Care Smoke
//!
//! Smoke-test client for the care management API.
//!
//! This is the entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - The API context, then runs the selected command

use anyhow::Result;
use clap::Parser;
use tracing::info;

use care_smoke::config::Settings;
use care_smoke::presentation::Cli;
use care_smoke::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    care_smoke::telemetry::init_tracing(cli.json_logs);

    // Load configuration from environment and config files
    let mut settings = Settings::load()?;
    cli.apply_overrides(&mut settings);
    settings.validate()?;
    info!(
        base_url = %settings.api.base_url,
        email = %settings.credentials.email,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings)?;
    application.run(cli.command()).await?;

    Ok(())
}
