//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: title bar
//! - [`display`]: pending expression and value
//! - [`keypad`]: the 5x4 button grid
//! - [`modal`]: error message drawn over the keypad
//! - [`footer`]: keybinding hints
//!
//! [`render_calculator`] composes them into the full frame; see
//! [`crate::ui::layout`] for the row plan.

mod display;
mod footer;
mod header;
mod keypad;
mod modal;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{HEADER_ROW, KEYPAD_TOP};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use display::render_display;
use footer::render_footer;
use header::render_header;
use keypad::render_keypad;
use modal::render_error_modal;

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame.
///
/// The keypad is always drawn so its geometry stays stable; an error modal,
/// when present, is drawn on top of it.
pub fn render_calculator(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let current_row = render_header(HEADER_ROW, &vm.header, theme, cols);
    render_border(current_row, &theme.colors.border, cols);
    render_display(&vm.display, theme, cols);
    render_border(KEYPAD_TOP - 1, &theme.colors.border, cols);

    render_keypad(&vm.keypad, theme);

    if let Some(modal) = &vm.error_modal {
        render_error_modal(modal, theme, cols);
    }

    let footer_row = rows.max(KEYPAD_TOP + 1);
    render_border(footer_row - 1, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
