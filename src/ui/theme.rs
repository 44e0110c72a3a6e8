//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Three are built in and embedded at compile time:
//!
//! - `catppuccin-mocha`: dark theme (default)
//! - `catppuccin-latte`: light theme
//! - `classic`: black display, grey digits, orange operators
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! # header_bg and display_bg are optional
//! display_fg = "#cdd6f4"
//! expression_fg = "#a6adc8"
//! number_fg = "#cdd6f4"
//! number_bg = "#45475a"
//! operator_fg = "#1e1e2e"
//! operator_bg = "#fab387"
//! function_fg = "#1e1e2e"
//! function_bg = "#a6adc8"
//! active_operator_fg = "#fab387"
//! active_operator_bg = "#1e1e2e"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! error_fg = "#1e1e2e"
//! error_bg = "#f38ba8"
//! ```

use crate::domain::{ButtonKind, Result, ZcalcError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions, all as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Main value on the display panel.
    pub display_fg: String,
    #[serde(default)]
    pub display_bg: Option<String>,
    /// Pending expression line above the value (e.g. `7 ×`).
    pub expression_fg: String,

    pub number_fg: String,
    pub number_bg: String,
    pub operator_fg: String,
    pub operator_bg: String,
    pub function_fg: String,
    pub function_bg: String,

    /// Operator button whose operation is pending.
    pub active_operator_fg: String,
    pub active_operator_bg: String,

    /// Footer and secondary text.
    pub text_dim: String,
    pub border: String,

    pub error_fg: String,
    pub error_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zcalc::ui::Theme;
    ///
    /// let theme = Theme::from_name("classic").unwrap();
    /// assert_eq!(theme.colors.operator_bg, "#ff9500");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "classic" => include_str!("../../themes/classic.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ZcalcError::Io`] if the file cannot be read and
    /// [`ZcalcError::Theme`] if it is not a valid theme document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| ZcalcError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Foreground and background colors for a keypad button.
    #[must_use]
    pub fn button_colors(&self, kind: ButtonKind, active: bool) -> (&str, &str) {
        let c = &self.colors;
        if active {
            return (&c.active_operator_fg, &c.active_operator_bg);
        }
        match kind {
            ButtonKind::Number => (&c.number_fg, &c.number_bg),
            ButtonKind::Operator => (&c.operator_fg, &c.operator_bg),
            ButtonKind::Function => (&c.function_fg, &c.function_bg),
        }
    }

    /// Parses `#rrggbb` (the `#` is optional). Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}
