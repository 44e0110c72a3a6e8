//! Screen geometry: where the header, display and keypad are drawn.
//!
//! The same [`KeypadLayout`] is used to draw the keypad and to resolve mouse
//! clicks back into button presses, so the two can never disagree.
//!
//! ```text
//! row 1         (blank)
//! row 2         header
//! row 3         border
//! row 4         pending expression      "7 ×"
//! row 5         display value           "14"
//! row 6         border
//! rows 7..=n-2  keypad, 5 rows x 4 columns
//! row n-1       border
//! row n         footer
//! ```
//!
//! All coordinates are 1-indexed terminal cells.

use crate::domain::ButtonEvent;

pub const HEADER_ROW: usize = 2;
pub const EXPRESSION_ROW: usize = 4;
pub const VALUE_ROW: usize = 5;
pub const KEYPAD_TOP: usize = 7;

/// Rows below the keypad: border and footer.
const KEYPAD_BOTTOM_MARGIN: usize = 2;

pub const KEYPAD_ROWS: usize = 5;
pub const KEYPAD_COLUMNS: usize = 4;

/// Keypad labels with their `(row, column, column span)`.
const KEYPAD: [(&str, usize, usize, usize); 19] = [
    ("C", 0, 0, 1),
    ("±", 0, 1, 1),
    ("%", 0, 2, 1),
    ("÷", 0, 3, 1),
    ("7", 1, 0, 1),
    ("8", 1, 1, 1),
    ("9", 1, 2, 1),
    ("×", 1, 3, 1),
    ("4", 2, 0, 1),
    ("5", 2, 1, 1),
    ("6", 2, 2, 1),
    ("-", 2, 3, 1),
    ("1", 3, 0, 1),
    ("2", 3, 1, 1),
    ("3", 3, 2, 1),
    ("+", 3, 3, 1),
    ("0", 4, 0, 2),
    (".", 4, 2, 1),
    ("=", 4, 3, 1),
];

/// One keypad button's screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadCell {
    pub button: ButtonEvent,
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl KeypadCell {
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top
            && row < self.top + self.height
            && col >= self.left
            && col < self.left + self.width
    }
}

/// Keypad geometry for a pane of a given size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadLayout {
    cells: Vec<KeypadCell>,
}

impl KeypadLayout {
    /// Lays the keypad out over the rows between the display and the footer.
    ///
    /// Buttons are at least one cell tall and wide. The rightmost column
    /// absorbs any width that does not divide evenly.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let keypad_height = rows.saturating_sub(KEYPAD_TOP - 1 + KEYPAD_BOTTOM_MARGIN);
        let cell_height = (keypad_height / KEYPAD_ROWS).max(1);
        let col_width = (cols / KEYPAD_COLUMNS).max(1);

        let cells = KEYPAD
            .iter()
            .filter_map(|&(label, row, col, span)| {
                let button = ButtonEvent::from_label(label)?;
                let left = 1 + col * col_width;
                let width = if col + span == KEYPAD_COLUMNS {
                    cols.saturating_sub(left - 1).max(1)
                } else {
                    col_width * span
                };
                Some(KeypadCell {
                    button,
                    top: KEYPAD_TOP + row * cell_height,
                    left,
                    width,
                    height: cell_height,
                })
            })
            .collect();

        Self { cells }
    }

    #[must_use]
    pub fn cells(&self) -> &[KeypadCell] {
        &self.cells
    }

    /// Resolves a 1-indexed screen position to the button drawn there.
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<ButtonEvent> {
        self.cells
            .iter()
            .find(|cell| cell.contains(row, col))
            .map(|cell| cell.button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Operator;

    #[test]
    fn all_buttons_are_laid_out() {
        let layout = KeypadLayout::new(24, 40);
        assert_eq!(layout.cells().len(), 19);
    }

    #[test]
    fn clicks_resolve_to_buttons() {
        // 16 keypad rows -> 3 rows per button, 10 columns per button
        let layout = KeypadLayout::new(24, 40);
        assert_eq!(layout.button_at(7, 1), Some(ButtonEvent::Clear));
        assert_eq!(layout.button_at(9, 40), Some(ButtonEvent::Operator(Operator::Divide)));
        assert_eq!(layout.button_at(10, 11), Some(ButtonEvent::Digit('8')));
        assert_eq!(layout.button_at(19, 15), Some(ButtonEvent::Digit('0')));
        assert_eq!(layout.button_at(19, 21), Some(ButtonEvent::Decimal));
        assert_eq!(layout.button_at(21, 40), Some(ButtonEvent::Equals));
    }

    #[test]
    fn clicks_outside_the_keypad_miss() {
        let layout = KeypadLayout::new(24, 40);
        assert_eq!(layout.button_at(5, 1), None);
        assert_eq!(layout.button_at(22, 1), None);
        assert_eq!(layout.button_at(7, 41), None);
    }

    #[test]
    fn zero_spans_two_columns() {
        let layout = KeypadLayout::new(24, 42);
        let zero = layout
            .cells()
            .iter()
            .find(|c| c.button == ButtonEvent::Digit('0'))
            .copied()
            .unwrap();
        assert_eq!(zero.width, 20);
        let equals = layout
            .cells()
            .iter()
            .find(|c| c.button == ButtonEvent::Equals)
            .copied()
            .unwrap();
        assert_eq!(equals.left, 31);
        assert_eq!(equals.width, 12);
    }

    #[test]
    fn tiny_panes_still_get_one_cell_buttons() {
        let layout = KeypadLayout::new(3, 2);
        assert!(layout.cells().iter().all(|c| c.width >= 1 && c.height == 1));
    }
}
