//! Input mode of the plugin UI.
//!
//! The calculator's own modes (accumulating, awaiting an operand) live in
//! [`crate::domain::Mode`]. This mode only decides how input is routed:
//!
//! - **Normal**: keys and clicks become button presses
//! - **`ErrorModal`**: an error is on screen and the next key or click only
//!   dismisses it

/// How user input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys and clicks are forwarded to the calculator.
    #[default]
    Normal,

    /// An error message is showing; any input acknowledges it.
    ErrorModal,
}
