//! Application layer between the plugin runtime and the calculator engine.
//!
//! ```text
//! User Input → Events → Event Handler → AppState::press → Actions → Side Effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effect commands emitted by the event handler
//! - [`handler`]: event processing
//! - [`modes`]: input routing mode
//! - [`state`]: per-pane state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::AppState;
