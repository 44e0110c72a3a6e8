//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler mutates [`AppState`](crate::app::AppState) and returns a
//! `Vec<Action>` for everything it cannot do itself. The plugin shim executes
//! them in order.
//!
//! # Example
//!
//! ```rust
//! use zcalc::app::Action;
//!
//! let actions = vec![Action::ReportError {
//!     message: "Cannot divide by zero".to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// A calculator press failed. The modal is already part of the state;
    /// the runtime records the failure in its logs.
    ReportError {
        /// User-facing message.
        message: String,
    },
}
