//! The calculator engine: a pure state machine over button presses.
//!
//! [`dispatch`] consumes a [`CalculatorState`] and a [`ButtonEvent`] and
//! returns the next state together with the display text and, when the press
//! failed, the [`EvalError`] to report. There is no I/O and nothing shared;
//! every session threads its own state value through `dispatch`.
//!
//! # Modes
//!
//! The state has two behavioral modes, derived rather than stored:
//!
//! - [`Mode::Accumulating`]: no operation is pending, digits build the entry
//! - [`Mode::AwaitingOperand`]: an operator was pressed, the entry holds the
//!   right operand being typed
//!
//! # Example
//!
//! ```
//! use zcalc::domain::{dispatch, init, ButtonEvent, Operator};
//!
//! let presses = [
//!     ButtonEvent::Digit('3'),
//!     ButtonEvent::Operator(Operator::Add),
//!     ButtonEvent::Digit('4'),
//!     ButtonEvent::Operator(Operator::Multiply),
//!     ButtonEvent::Digit('2'),
//!     ButtonEvent::Equals,
//! ];
//!
//! let mut state = init();
//! let mut display = String::new();
//! for press in presses {
//!     let outcome = dispatch(state, press);
//!     state = outcome.state;
//!     display = outcome.display;
//! }
//! assert_eq!(display, "14");
//! ```

use super::button::{ButtonEvent, Operator};
use super::error::EvalError;
use super::number::{display_text, format_number, parse_operand};

/// Entry value of a fresh or cleared calculator.
const INITIAL_ENTRY: &str = "0";

/// Left operand and operator captured when an operator was pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    /// Entry literal at the time the operator was pressed.
    pub left: String,
    pub operator: Operator,
}

/// Behavioral mode derived from the pending operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Accumulating,
    AwaitingOperand,
}

/// The complete calculator state.
///
/// The entry is never empty and holds at most one decimal point. Keeping the
/// left operand and operator in a single `Option` means one can never be set
/// without the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    entry: String,
    pending: Option<PendingOperation>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            entry: INITIAL_ENTRY.to_string(),
            pending: None,
        }
    }
}

impl CalculatorState {
    /// The literal currently being edited.
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// The captured left operand and operator, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// The captured left operand literal, if any.
    #[must_use]
    pub fn pending_value(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.left.as_str())
    }

    /// The captured operator, if any.
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        if self.pending.is_some() {
            Mode::AwaitingOperand
        } else {
            Mode::Accumulating
        }
    }

    /// Text for the display surface, truncated to the display width.
    #[must_use]
    pub fn display(&self) -> String {
        display_text(&self.entry)
    }

    fn push_digit(&mut self, digit: char) {
        if self.entry == INITIAL_ENTRY {
            self.entry.clear();
        }
        self.entry.push(digit);
    }

    fn push_decimal(&mut self) {
        if !self.entry.contains('.') {
            self.entry.push('.');
        }
    }

    fn toggle_sign(&mut self) {
        if self.entry == INITIAL_ENTRY {
            return;
        }
        if let Some(unsigned) = self.entry.strip_prefix('-') {
            self.entry = unsigned.to_string();
        } else {
            self.entry.insert(0, '-');
        }
    }

    /// Evaluates the pending operation into the entry.
    ///
    /// Nothing is committed unless the whole evaluation succeeds.
    fn evaluate(&mut self) -> Result<(), EvalError> {
        let Some(pending) = &self.pending else {
            return Ok(());
        };

        let lhs = parse_operand(&pending.left)?;
        let rhs = parse_operand(&self.entry)?;
        let result = pending.operator.apply(lhs, rhs)?;
        let formatted = format_number(result)?;

        tracing::debug!(
            lhs = %pending.left,
            operator = pending.operator.symbol(),
            rhs = %self.entry,
            result = %formatted,
            "evaluated pending operation"
        );

        self.entry = formatted;
        self.pending = None;
        Ok(())
    }

    /// Evaluates any pending operation, then captures the entry as the left
    /// operand of `operator`.
    ///
    /// A failed evaluation clears the calculator first, so the operator is
    /// still recorded, against a left operand of `"0"`.
    fn press_operator(&mut self, operator: Operator) -> Result<(), EvalError> {
        let evaluated = self.evaluate();
        if evaluated.is_err() {
            *self = init();
        }
        let left = std::mem::replace(&mut self.entry, INITIAL_ENTRY.to_string());
        self.pending = Some(PendingOperation { left, operator });
        evaluated
    }

    fn percent(&mut self) -> Result<(), EvalError> {
        let value = parse_operand(&self.entry)?;
        self.entry = format_number(value / 100.0)?;
        Ok(())
    }
}

/// Result of a single [`dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// The state after the press. Already cleared if `error` is set, except
    /// for a failed percent, which leaves the state untouched, and a failed
    /// operator press, which clears and then records the operator.
    pub state: CalculatorState,
    /// Text to show on the display surface. After an operator press this is
    /// the captured left operand rather than the reset entry.
    pub display: String,
    /// The failure to report to the user, if the press failed.
    pub error: Option<EvalError>,
}

/// Produces the initial state: entry `"0"`, nothing pending.
#[must_use]
pub fn init() -> CalculatorState {
    CalculatorState::default()
}

/// Applies one button press to a state.
///
/// An equals press that fails reports the error and returns the cleared
/// state. An operator press that fails does the same but still records the
/// operator against a left operand of `"0"`. A percent press that fails
/// reports the error and leaves the state as it was.
///
/// # Examples
///
/// ```
/// use zcalc::domain::{dispatch, init, ButtonEvent, EvalError, Operator};
///
/// let s = dispatch(init(), ButtonEvent::Digit('5')).state;
/// let s = dispatch(s, ButtonEvent::Operator(Operator::Divide)).state;
/// let s = dispatch(s, ButtonEvent::Digit('0')).state;
/// let outcome = dispatch(s, ButtonEvent::Equals);
///
/// assert_eq!(outcome.error, Some(EvalError::DivisionByZero));
/// assert_eq!(outcome.display, "0");
/// assert_eq!(outcome.state, init());
/// ```
#[must_use]
pub fn dispatch(state: CalculatorState, event: ButtonEvent) -> Dispatch {
    let _span = tracing::debug_span!(
        "dispatch",
        event = ?event,
        entry = %state.entry,
        mode = ?state.mode()
    )
    .entered();

    let mut next = state;
    let outcome = match event {
        ButtonEvent::Digit(d) => {
            next.push_digit(d);
            Ok(())
        }
        ButtonEvent::Decimal => {
            next.push_decimal();
            Ok(())
        }
        ButtonEvent::Operator(op) => {
            let error = next.press_operator(op).err();
            if let Some(e) = &error {
                tracing::warn!(error = %e, operator = op.symbol(), "evaluation failed, clearing before recording operator");
            }
            let display = display_text(next.pending_value().unwrap_or(INITIAL_ENTRY));
            return Dispatch {
                state: next,
                display,
                error,
            };
        }
        ButtonEvent::Equals => next.evaluate(),
        ButtonEvent::Clear => {
            next = init();
            Ok(())
        }
        ButtonEvent::ToggleSign => {
            next.toggle_sign();
            Ok(())
        }
        // percent only commits on success, so a failure leaves `next` as it was
        ButtonEvent::Percent => {
            if let Err(e) = next.percent() {
                tracing::warn!(error = %e, entry = %next.entry, "percent failed, keeping entry");
                let display = next.display();
                return Dispatch {
                    state: next,
                    display,
                    error: Some(e),
                };
            }
            Ok(())
        }
    };

    match outcome {
        Ok(()) => {
            let display = next.display();
            Dispatch {
                state: next,
                display,
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "evaluation failed, clearing calculator");
            let cleared = init();
            let display = cleared.display();
            Dispatch {
                state: cleared,
                display,
                error: Some(e),
            }
        }
    }
}
