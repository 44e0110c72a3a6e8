//! zcalc: a four-function calculator plugin for Zellij.
//!
//! The calculator is a pure state machine: a front end forwards button
//! presses to [`dispatch`] and renders the display string it returns. The
//! Zellij plugin in `main.rs` is one such front end; it maps keys and mouse
//! clicks onto buttons and draws a themed keypad.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and error modal                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐   ┌───────────────────────┐
//! │ UI Layer (ui/)        │   │ Domain (domain/)      │
//! │ - Layout, hit-testing │   │ - Calculator engine   │
//! │ - Components, themes  │   │ - Number formatting   │
//! └───────────────────────┘   └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure / Observability                     │
//! │  - Sandbox paths                                    │
//! │  - OpenTelemetry spans to a local OTLP JSON file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: calculator engine (`init`, `dispatch`) and its types
//! - [`app`]: per-pane state, events and actions
//! - [`ui`]: layout, components and themes
//! - [`infrastructure`]: platform paths
//! - [`observability`]: tracing setup
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zcalc.wasm" {
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zcalc::{handle_event, initialize, ButtonEvent, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "12+2=".chars() {
//!     let button = ButtonEvent::from_key(c).expect("calculator key");
//!     handle_event(&mut state, &Event::Button(button))?;
//! }
//! assert_eq!(state.display, "14");
//! # Ok::<(), zcalc::ZcalcError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{dispatch, init, ButtonEvent, CalculatorState, EvalError, Result, ZcalcError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
///
/// ```kdl
/// plugin location="file:/path/to/zcalc.wasm" {
///     theme "classic"
///     theme_file "~/.config/zcalc/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name: `catppuccin-mocha`, `catppuccin-latte` or
    /// `classic`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` is expanded.
    pub theme_file: Option<String>,

    /// Filter directive for exported spans. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Reads `theme`, `theme_file` and `trace_level`. Blank values count as
    /// unset; unknown keys are ignored.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zcalc::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "classic".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("classic"));
    /// assert!(config.trace_level.is_none());
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }
}

/// Creates the pane state with the configured theme.
///
/// The theme comes from `theme_file` if set, else from `theme`, else the
/// default. A theme that fails to load is logged and replaced by the
/// default; it never prevents the calculator from starting.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zcalc plugin");
    AppState::new(resolve_theme(config))
}

fn resolve_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_deref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn parses_known_keys() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/t.toml"),
            ("trace_level", "debug"),
            ("unrelated", "x"),
        ]));
        assert_eq!(
            config,
            Config {
                theme_name: Some("catppuccin-latte".to_string()),
                theme_file: Some("~/t.toml".to_string()),
                trace_level: Some("debug".to_string()),
            }
        );
    }

    #[test]
    fn blank_values_are_unset() {
        let config = Config::from_zellij(&map(&[("theme", "  "), ("trace_level", "")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn theme_name_selects_builtin() {
        let config = Config {
            theme_name: Some("classic".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "classic");
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme, Theme::default());
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let classic = Theme::from_name("classic").unwrap();
        let custom = Theme {
            name: "custom".to_string(),
            ..classic
        };
        file.write_all(toml::to_string(&custom).unwrap().as_bytes())
            .unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            trace_level: None,
        };
        assert_eq!(initialize(&config).theme, custom);
    }

    #[test]
    fn broken_theme_file_falls_back_to_default() {
        let config = Config {
            theme_file: Some("/nonexistent/zcalc/theme.toml".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme, Theme::default());
        assert_eq!(state.display, "0");
    }
}
