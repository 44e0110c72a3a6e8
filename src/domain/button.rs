//! Button events and arithmetic operators.
//!
//! Every way of talking to the calculator (a keypad label, a keyboard
//! shortcut, a mouse click resolved by the layout) is translated into a
//! [`ButtonEvent`] at the boundary. The engine matches on it exhaustively and
//! never looks at raw input again.

use super::error::EvalError;

/// One of the four binary operators on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Applies the operator to two operands.
    ///
    /// Addition, subtraction and multiplication are plain `f64` operations.
    /// Division fails when `rhs == 0.0`; the comparison is exact, so `-0.0`
    /// fails as well.
    ///
    /// # Errors
    ///
    /// - [`EvalError::DivisionByZero`] for `x ÷ 0`
    /// - [`EvalError::InvalidOperation`] when the result is not finite
    ///
    /// # Examples
    ///
    /// ```
    /// use zcalc::domain::Operator;
    ///
    /// assert_eq!(Operator::Multiply.apply(7.0, 2.0), Ok(14.0));
    /// assert!(Operator::Divide.apply(1.0, 0.0).is_err());
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(EvalError::InvalidOperation(format!(
                "{lhs} {} {rhs} is not a finite number",
                self.symbol()
            )))
        }
    }

    /// Keypad symbol for the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

/// Visual category of a keypad button, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digits and the decimal point.
    Number,
    /// The four operators and equals.
    Operator,
    /// Clear, sign toggle and percent.
    Function,
}

/// A single press on the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// A decimal digit. The variant itself accepts any `char`; input coming
    /// from keys or labels goes through [`ButtonEvent::digit`],
    /// [`ButtonEvent::from_label`] or [`ButtonEvent::from_key`], which only
    /// ever produce ASCII digits.
    Digit(char),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    ToggleSign,
    Percent,
}

impl ButtonEvent {
    /// Builds a digit event, rejecting anything but `'0'..='9'`.
    #[must_use]
    pub const fn digit(d: char) -> Option<Self> {
        if d.is_ascii_digit() {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Parses a keypad label (`0-9 . ÷ × - + = C ± %`).
    ///
    /// # Examples
    ///
    /// ```
    /// use zcalc::domain::{ButtonEvent, Operator};
    ///
    /// assert_eq!(ButtonEvent::from_label("×"), Some(ButtonEvent::Operator(Operator::Multiply)));
    /// assert_eq!(ButtonEvent::from_label("±"), Some(ButtonEvent::ToggleSign));
    /// assert_eq!(ButtonEvent::from_label("sqrt"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "." => Some(Self::Decimal),
            "÷" => Some(Self::Operator(Operator::Divide)),
            "×" => Some(Self::Operator(Operator::Multiply)),
            "-" => Some(Self::Operator(Operator::Subtract)),
            "+" => Some(Self::Operator(Operator::Add)),
            "=" => Some(Self::Equals),
            "C" => Some(Self::Clear),
            "±" => Some(Self::ToggleSign),
            "%" => Some(Self::Percent),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(d), None) => Self::digit(d),
                    _ => None,
                }
            }
        }
    }

    /// Maps a typed character to an event.
    ///
    /// Accepts the keypad labels plus the usual keyboard spellings: `*` and
    /// `x` for ×, `/` for ÷, `c` for clear, `n` and `_` for the sign toggle.
    /// Enter and Escape are not characters and are mapped by the plugin shim.
    #[must_use]
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '*' | 'x' | 'X' => Some(Self::Operator(Operator::Multiply)),
            '/' => Some(Self::Operator(Operator::Divide)),
            'c' => Some(Self::Clear),
            'n' | '_' => Some(Self::ToggleSign),
            other => {
                let mut buf = [0u8; 4];
                Self::from_label(other.encode_utf8(&mut buf))
            }
        }
    }

    /// Keypad label for the event; the inverse of [`ButtonEvent::from_label`].
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// Visual category of the button.
    #[must_use]
    pub const fn kind(self) -> ButtonKind {
        match self {
            Self::Digit(_) | Self::Decimal => ButtonKind::Number,
            Self::Operator(_) | Self::Equals => ButtonKind::Operator,
            Self::Clear | Self::ToggleSign | Self::Percent => ButtonKind::Function,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keypad_label_round_trips() {
        let labels = [
            "C", "±", "%", "÷", "7", "8", "9", "×", "4", "5", "6", "-", "1", "2", "3", "+", "0",
            ".", "=",
        ];
        for label in labels {
            let event = ButtonEvent::from_label(label).unwrap_or_else(|| panic!("unmapped {label}"));
            assert_eq!(event.label(), label);
        }
    }

    #[test]
    fn keyboard_aliases() {
        assert_eq!(ButtonEvent::from_key('*'), Some(ButtonEvent::Operator(Operator::Multiply)));
        assert_eq!(ButtonEvent::from_key('/'), Some(ButtonEvent::Operator(Operator::Divide)));
        assert_eq!(ButtonEvent::from_key('c'), Some(ButtonEvent::Clear));
        assert_eq!(ButtonEvent::from_key('C'), Some(ButtonEvent::Clear));
        assert_eq!(ButtonEvent::from_key('='), Some(ButtonEvent::Equals));
        assert_eq!(ButtonEvent::from_key('9'), Some(ButtonEvent::Digit('9')));
        assert_eq!(ButtonEvent::from_key('q'), None);
    }

    #[test]
    fn digit_rejects_non_digits() {
        assert_eq!(ButtonEvent::digit('a'), None);
        assert_eq!(ButtonEvent::from_label("12"), None);
        assert_eq!(ButtonEvent::from_label(""), None);
    }

    #[test]
    fn input_boundary_only_produces_ascii_digits() {
        for c in ('\0'..='\u{2FF}').chain(['٣', '७', '³']) {
            for event in [ButtonEvent::from_key(c), ButtonEvent::digit(c)] {
                if let Some(ButtonEvent::Digit(d)) = event {
                    assert!(d.is_ascii_digit(), "{c:?} produced Digit({d:?})");
                }
            }
        }
    }

    #[test]
    fn apply_reports_overflow() {
        assert!(matches!(
            Operator::Multiply.apply(f64::MAX, 10.0),
            Err(EvalError::InvalidOperation(_))
        ));
    }

    #[test]
    fn negative_zero_divisor_is_division_by_zero() {
        assert_eq!(Operator::Divide.apply(3.0, -0.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn button_kinds() {
        assert_eq!(ButtonEvent::Decimal.kind(), ButtonKind::Number);
        assert_eq!(ButtonEvent::Equals.kind(), ButtonKind::Operator);
        assert_eq!(ButtonEvent::Percent.kind(), ButtonKind::Function);
    }
}
