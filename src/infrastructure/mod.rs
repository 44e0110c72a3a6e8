//! Infrastructure layer for filesystem and environment interactions.
//!
//! Only path handling for the Zellij sandbox lives here today; it is shared
//! by theme loading and the trace file exporter.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
