//! Domain layer: the calculator engine and its types.
//!
//! Everything here is pure and independent of Zellij, so it can be driven by
//! any front end that forwards button presses and renders a display string.
//!
//! # Organization
//!
//! - [`button`]: button events, operators and arithmetic
//! - [`calculator`]: the state machine (`init`, `dispatch`)
//! - [`number`]: operand parsing, result formatting and display truncation
//! - [`error`]: error types and result aliases
//!
//! # Examples
//!
//! ```
//! use zcalc::domain::{dispatch, init, ButtonEvent};
//!
//! let outcome = dispatch(init(), ButtonEvent::Digit('7'));
//! let outcome = dispatch(outcome.state, ButtonEvent::ToggleSign);
//! assert_eq!(outcome.display, "-7");
//! ```

pub mod button;
pub mod calculator;
pub mod error;
pub mod number;

pub use button::{ButtonEvent, ButtonKind, Operator};
pub use calculator::{dispatch, init, CalculatorState, Dispatch, Mode, PendingOperation};
pub use error::{EvalError, Result, ZcalcError};
