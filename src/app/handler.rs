//! Event handling and state transition logic.
//!
//! The plugin shim turns Zellij input into [`Event`]s; [`handle_event`]
//! applies them to the [`AppState`] and returns whether the pane needs a
//! redraw plus the [`Action`]s to execute.
//!
//! ```text
//! Key / Mouse → Event → handle_event → AppState::press → dispatch
//!                                    ↘ Vec<Action> → plugin runtime
//! ```
//!
//! # Example
//!
//! ```rust
//! use zcalc::app::{handle_event, AppState, Event};
//! use zcalc::domain::ButtonEvent;
//! use zcalc::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Button(ButtonEvent::Digit('9')))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! assert_eq!(state.display, "9");
//! # Ok::<(), zcalc::ZcalcError>(())
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::{ButtonEvent, Result};
use crate::ui::layout::KeypadLayout;

/// Events produced by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A button press from the keyboard.
    Button(ButtonEvent),

    /// A left click at a 1-indexed cell of a pane of the given size.
    Click {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Acknowledges the error modal without pressing anything.
    DismissError,

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// While the error modal is showing, button presses and clicks only dismiss
/// it; they do not reach the calculator.
///
/// # Errors
///
/// No event currently fails; the `Result` keeps the signature stable for
/// runtime-facing events.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match *event {
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::DismissError => {
            let had_error = state.input_mode == InputMode::ErrorModal;
            state.dismiss_error();
            Ok((had_error, vec![]))
        }
        Event::Button(_) | Event::Click { .. } if state.input_mode == InputMode::ErrorModal => {
            tracing::debug!("dismissing error modal");
            state.dismiss_error();
            Ok((true, vec![]))
        }
        Event::Button(button) => Ok(press(state, button)),
        Event::Click {
            row,
            col,
            rows,
            cols,
        } => match KeypadLayout::new(rows, cols).button_at(row, col) {
            Some(button) => {
                tracing::debug!(row, col, button = ?button, "click resolved to button");
                Ok(press(state, button))
            }
            None => {
                tracing::trace!(row, col, "click outside keypad");
                Ok((false, vec![]))
            }
        },
    }
}

fn press(state: &mut AppState, button: ButtonEvent) -> (bool, Vec<Action>) {
    match state.press(button) {
        Some(error) => {
            tracing::debug!(error = %error, "calculator reported an error");
            (
                true,
                vec![Action::ReportError {
                    message: error.user_message().to_string(),
                }],
            )
        }
        None => (true, vec![]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Operator;
    use crate::ui::Theme;

    #[test]
    fn division_by_zero_reports_and_blocks_next_press() {
        let mut state = AppState::new(Theme::default());
        for button in [
            ButtonEvent::Digit('5'),
            ButtonEvent::Operator(Operator::Divide),
            ButtonEvent::Digit('0'),
        ] {
            handle_event(&mut state, &Event::Button(button)).unwrap();
        }

        let (render, actions) = handle_event(&mut state, &Event::Button(ButtonEvent::Equals)).unwrap();
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::ReportError {
                message: "Cannot divide by zero".to_string()
            }]
        );
        assert_eq!(state.input_mode, InputMode::ErrorModal);

        // the next press only dismisses the modal
        handle_event(&mut state, &Event::Button(ButtonEvent::Digit('3'))).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.display, "0");

        handle_event(&mut state, &Event::Button(ButtonEvent::Digit('3'))).unwrap();
        assert_eq!(state.display, "3");
    }

    #[test]
    fn clicks_press_buttons() {
        let mut state = AppState::new(Theme::default());
        // 24x40 pane: "7" is the first column of the second keypad row
        let click = Event::Click {
            row: 10,
            col: 2,
            rows: 24,
            cols: 40,
        };
        let (render, _) = handle_event(&mut state, &click).unwrap();
        assert!(render);
        assert_eq!(state.display, "7");
    }

    #[test]
    fn clicks_outside_keypad_are_ignored() {
        let mut state = AppState::new(Theme::default());
        let click = Event::Click {
            row: 2,
            col: 2,
            rows: 24,
            cols: 40,
        };
        assert_eq!(handle_event(&mut state, &click).unwrap(), (false, vec![]));
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = AppState::new(Theme::default());
        assert_eq!(
            handle_event(&mut state, &Event::CloseFocus).unwrap(),
            (false, vec![Action::CloseFocus])
        );
    }

    fn state_showing_error() -> AppState {
        let mut state = AppState::new(Theme::default());
        for button in [
            ButtonEvent::Digit('1'),
            ButtonEvent::Operator(Operator::Divide),
            ButtonEvent::Digit('0'),
            ButtonEvent::Equals,
        ] {
            handle_event(&mut state, &Event::Button(button)).unwrap();
        }
        assert_eq!(state.input_mode, InputMode::ErrorModal);
        state
    }

    #[test]
    fn dismiss_event_closes_modal() {
        let mut state = state_showing_error();
        assert_eq!(
            handle_event(&mut state, &Event::DismissError).unwrap(),
            (true, vec![])
        );
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.error, None);
    }

    #[test]
    fn modal_swallows_every_button() {
        let buttons = [
            ButtonEvent::Equals,
            ButtonEvent::Clear,
            ButtonEvent::Digit('4'),
            ButtonEvent::Operator(Operator::Add),
        ];
        for button in buttons {
            let mut state = state_showing_error();
            let before = state.calculator.clone();
            let (render, actions) = handle_event(&mut state, &Event::Button(button)).unwrap();
            assert!(render);
            assert!(actions.is_empty());
            assert_eq!(state.input_mode, InputMode::Normal);
            assert_eq!(state.calculator, before);
        }
    }

    #[test]
    fn dismiss_without_error_does_not_render() {
        let mut state = AppState::new(Theme::default());
        assert_eq!(
            handle_event(&mut state, &Event::DismissError).unwrap(),
            (false, vec![])
        );
    }
}
