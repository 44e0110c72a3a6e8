//! Error modal renderer.
//!
//! Drawn over the top of the keypad in the theme's error colors: a title, the
//! message and a dismissal hint, each on its own centered line.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::layout::KEYPAD_TOP;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ErrorModal;

const MARGIN: usize = 2;

pub fn render_error_modal(modal: &ErrorModal, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(MARGIN * 2).max(1);
    let left = if cols > MARGIN * 2 { MARGIN + 1 } else { 1 };
    let fg = Theme::fg(&theme.colors.error_fg);
    let bg = Theme::bg(&theme.colors.error_bg);

    let lines = [
        ("", false),
        (modal.title.as_str(), true),
        (modal.message.as_str(), false),
        ("", false),
        (modal.hint.as_str(), false),
        ("", false),
    ];

    for (offset, (text, bold)) in lines.iter().enumerate() {
        position_cursor(KEYPAD_TOP + offset, left);
        print!("{fg}{bg}");
        if *bold {
            print!("{}", Theme::bold());
        }
        print!("{}", center(text, width));
        print!("{}", Theme::reset());
    }
}
