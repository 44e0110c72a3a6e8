//! Display panel renderer.
//!
//! Two lines: the pending expression, dimmed, and the value in bold. Both are
//! right-aligned with one column of padding, like a pocket calculator.

use crate::ui::helpers::{align_right, position_cursor};
use crate::ui::layout::{EXPRESSION_ROW, VALUE_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayInfo;

const PADDING: usize = 1;

pub fn render_display(display: &DisplayInfo, theme: &Theme, cols: usize) {
    let inner = cols.saturating_sub(PADDING * 2);
    let background = theme
        .colors
        .display_bg
        .as_deref()
        .map(Theme::bg)
        .unwrap_or_default();

    position_cursor(EXPRESSION_ROW, 1);
    print!("{background}{}", Theme::fg(&theme.colors.expression_fg));
    print!("{}{}{}", " ".repeat(PADDING), align_right(&display.expression, inner), " ".repeat(PADDING));
    print!("{}", Theme::reset());

    position_cursor(VALUE_ROW, 1);
    print!("{background}{}{}", Theme::bold(), Theme::fg(&theme.colors.display_fg));
    print!("{}{}{}", " ".repeat(PADDING), align_right(&display.value, inner), " ".repeat(PADDING));
    print!("{}", Theme::reset());
}
