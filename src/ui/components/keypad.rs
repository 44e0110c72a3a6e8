//! Keypad renderer.
//!
//! Each button is a filled rectangle with its label centered on the middle
//! line. The last column of every rectangle is left unpainted so neighbouring
//! buttons stay visually separate.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ButtonItem;

pub fn render_keypad(buttons: &[ButtonItem], theme: &Theme) {
    for button in buttons {
        render_button(button, theme);
    }
}

fn render_button(button: &ButtonItem, theme: &Theme) {
    let (fg, bg) = theme.button_colors(button.kind, button.is_active);
    let painted = button.width.saturating_sub(1).max(1);
    let label_row = button.top + button.height / 2;

    for row in button.top..button.top + button.height {
        position_cursor(row, button.left);
        print!("{}{}", Theme::fg(fg), Theme::bg(bg));
        if row == label_row {
            print!("{}{}", Theme::bold(), center(&button.label, painted));
        } else {
            print!("{}", " ".repeat(painted));
        }
        print!("{}", Theme::reset());
    }
}
