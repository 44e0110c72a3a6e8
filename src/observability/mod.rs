//! Trace export for the plugin.
//!
//! Spans from `tracing` macros reach an OpenTelemetry SDK pipeline whose
//! exporter appends OTLP JSON lines to a local file:
//!
//! ```text
//! tracing → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → RotatingFile
//! ```
//!
//! The file lives at `~/.local/share/zellij/zcalc/zcalc-otlp.json` (seen as
//! `/host/.local/share/zellij/zcalc/` from inside the plugin sandbox) and is
//! rotated at 5 MiB, keeping three backups.
//!
//! The filter level comes from the `trace_level` plugin option and defaults
//! to `"info"`. Engine spans are emitted at `debug`.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`exporter`]: span exporter and OTLP JSON encoding
//! - [`file_writer`]: size-capped file with numbered backups

mod exporter;
mod file_writer;
mod init;

pub use init::{init_tracing, TRACE_FILE};
