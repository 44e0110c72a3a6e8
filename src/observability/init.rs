//! Subscriber setup for the plugin.

use super::exporter::create_tracer_provider;
use super::file_writer::{RotatingFile, DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "zcalc";

/// Trace file name inside the data directory.
pub const TRACE_FILE: &str = "zcalc-otlp.json";

/// Installs the global subscriber exporting spans as OTLP JSON.
///
/// The filter comes from `config.trace_level` and defaults to `"info"`.
/// Spans go to `zcalc-otlp.json` under the data directory, rotated at
/// 5 MiB with three backups.
///
/// Observability is optional: if the data directory cannot be created
/// nothing is installed, and a second call leaves the first subscriber in
/// place.
///
/// # Example
///
/// ```rust
/// use zcalc::observability::init_tracing;
/// use zcalc::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let writer = RotatingFile::new(data_dir.join(TRACE_FILE), DEFAULT_MAX_BYTES, DEFAULT_BACKUPS);
    let provider = create_tracer_provider(writer, resource);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
