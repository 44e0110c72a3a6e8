//! Shared rendering utilities.

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Pads `text` with spaces to exactly `width` columns, centered.
///
/// Text wider than `width` is cut. Widths are counted in characters, which is
/// exact for everything the calculator draws (digits, ASCII and `÷×±`).
///
/// # Example
///
/// ```rust
/// use zcalc::ui::helpers::center;
///
/// assert_eq!(center("7", 5), "  7  ");
/// assert_eq!(center("ab", 5), " ab  ");
/// ```
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let text: String = text.chars().take(width).collect();
    let len = text.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Pads `text` with spaces to exactly `width` columns, right-aligned.
///
/// Text wider than `width` keeps its rightmost characters.
#[must_use]
pub fn align_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().skip(len - width).collect();
    }
    format!("{}{text}", " ".repeat(width - len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_cuts_wide_text() {
        assert_eq!(center("12345", 3), "123");
        assert_eq!(center("±", 4), " ±  ");
    }

    #[test]
    fn align_right_pads_and_cuts() {
        assert_eq!(align_right("14", 5), "   14");
        assert_eq!(align_right("123456", 4), "3456");
    }
}
