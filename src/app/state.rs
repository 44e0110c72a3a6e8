//! Application state and view model computation.
//!
//! [`AppState`] is what one plugin pane holds: the calculator's own state,
//! the last display string it produced, the active theme and whether an error
//! is waiting to be acknowledged. The calculator state is threaded through
//! [`dispatch`] on every press; nothing else ever mutates it.
//!
//! # Example
//!
//! ```rust
//! use zcalc::app::AppState;
//! use zcalc::domain::ButtonEvent;
//! use zcalc::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.press(ButtonEvent::Digit('4'));
//! let viewmodel = state.compute_viewmodel(24, 40);
//! assert_eq!(viewmodel.display.value, "4");
//! ```

use super::modes::InputMode;
use crate::domain::number::display_text;
use crate::domain::{dispatch, init, ButtonEvent, CalculatorState, EvalError};
use crate::ui::layout::KeypadLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ButtonItem, DisplayInfo, ErrorModal, FooterInfo, HeaderInfo, UIViewModel,
};

const TITLE: &str = "Calculator";

const NORMAL_KEYBINDINGS: &str =
    "0-9 .  + - * /  Enter: =  Esc/c: clear  %: percent  n: ±  q: quit";

const MODAL_KEYBINDINGS: &str = "Any key or click: continue";

/// Per-pane application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Calculator engine state.
    pub calculator: CalculatorState,

    /// Display string returned by the most recent dispatch.
    pub display: String,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// How the next key or click is routed.
    pub input_mode: InputMode,

    /// Error waiting to be acknowledged. Set together with
    /// [`InputMode::ErrorModal`].
    pub error: Option<EvalError>,
}

impl AppState {
    /// Creates a state holding a fresh calculator.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let calculator = init();
        let display = calculator.display();
        Self {
            calculator,
            display,
            theme,
            input_mode: InputMode::Normal,
            error: None,
        }
    }

    /// Runs one button press through the engine.
    ///
    /// On failure the error modal is raised and the error is returned; the
    /// calculator has already recovered by then.
    pub fn press(&mut self, event: ButtonEvent) -> Option<EvalError> {
        let outcome = dispatch(std::mem::take(&mut self.calculator), event);
        self.calculator = outcome.state;
        self.display = outcome.display;

        if let Some(error) = &outcome.error {
            self.error = Some(error.clone());
            self.input_mode = InputMode::ErrorModal;
        }
        outcome.error
    }

    /// Acknowledges the pending error, if any.
    pub fn dismiss_error(&mut self) {
        self.error = None;
        self.input_mode = InputMode::Normal;
    }

    /// Computes a renderable view model for a pane of `rows` x `cols` cells.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let active_operator = self.calculator.pending_operator();

        let keypad = KeypadLayout::new(rows, cols)
            .cells()
            .iter()
            .map(|cell| ButtonItem {
                label: cell.button.label(),
                kind: cell.button.kind(),
                is_active: matches!(
                    (cell.button, active_operator),
                    (ButtonEvent::Operator(op), Some(pending)) if op == pending
                ),
                top: cell.top,
                left: cell.left,
                width: cell.width,
                height: cell.height,
            })
            .collect();

        UIViewModel {
            header: HeaderInfo {
                title: TITLE.to_string(),
            },
            display: DisplayInfo {
                value: self.display.clone(),
                expression: self.compute_expression(),
            },
            keypad,
            footer: self.compute_footer(),
            error_modal: self.compute_error_modal(),
        }
    }

    /// Pending left operand and operator, e.g. `"7 ×"`.
    fn compute_expression(&self) -> String {
        self.calculator.pending().map_or_else(String::new, |pending| {
            format!("{} {}", display_text(&pending.left), pending.operator.symbol())
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => NORMAL_KEYBINDINGS,
            InputMode::ErrorModal => MODAL_KEYBINDINGS,
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_error_modal(&self) -> Option<ErrorModal> {
        match (self.input_mode, &self.error) {
            (InputMode::ErrorModal, Some(error)) => Some(ErrorModal {
                title: "Error".to_string(),
                message: error.user_message().to_string(),
                hint: MODAL_KEYBINDINGS.to_string(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Operator;

    fn press_all(state: &mut AppState, events: &[ButtonEvent]) {
        for &event in events {
            state.press(event);
        }
    }

    #[test]
    fn pending_operator_is_highlighted_and_shown() {
        let mut state = AppState::new(Theme::default());
        press_all(
            &mut state,
            &[ButtonEvent::Digit('7'), ButtonEvent::Operator(Operator::Multiply)],
        );

        let vm = state.compute_viewmodel(24, 40);
        assert_eq!(vm.display.expression, "7 ×");
        assert_eq!(vm.display.value, "7");

        let active: Vec<&str> = vm
            .keypad
            .iter()
            .filter(|b| b.is_active)
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(active, vec!["×"]);
    }

    #[test]
    fn error_raises_modal_until_dismissed() {
        let mut state = AppState::new(Theme::default());
        press_all(
            &mut state,
            &[
                ButtonEvent::Digit('5'),
                ButtonEvent::Operator(Operator::Divide),
                ButtonEvent::Digit('0'),
            ],
        );
        let error = state.press(ButtonEvent::Equals);
        assert_eq!(error, Some(EvalError::DivisionByZero));

        let vm = state.compute_viewmodel(24, 40);
        let modal = vm.error_modal.expect("modal should be shown");
        assert_eq!(modal.message, "Cannot divide by zero");
        assert_eq!(vm.display.value, "0");
        assert_eq!(vm.footer.keybindings, MODAL_KEYBINDINGS);

        state.dismiss_error();
        let vm = state.compute_viewmodel(24, 40);
        assert!(vm.error_modal.is_none());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn fresh_state_shows_zero_without_expression() {
        let state = AppState::new(Theme::default());
        let vm = state.compute_viewmodel(24, 40);
        assert_eq!(vm.header.title, "Calculator");
        assert_eq!(vm.display.value, "0");
        assert!(vm.display.expression.is_empty());
        assert_eq!(vm.keypad.len(), 19);
    }
}
