//! Telemetry
//!
//! Structured logging setup.

use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize tracing subscriber
///
/// `json` switches the output to one JSON object per event, which is easier
/// to collect when the smoke run is part of a pipeline.
pub fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,care_smoke=debug,reqwest=warn,hyper=warn"));

    let pretty_layer = (!json).then(|| {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
    });

    let json_layer = json.then(|| fmt::layer().json().with_current_span(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(pretty_layer)
        .with(json_layer)
        .init();

    tracing::debug!("Tracing initialized");
}
