//! Zellij plugin wrapper and entry point.
//!
//! This is the thin layer between the zcalc library and the Zellij plugin
//! system: it turns key and mouse events into library [`Event`]s, hands them
//! to [`handle_event`], executes the returned actions and draws the pane.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: register for `Key` and `Mouse` events
//! 3. **Update**: map events, delegate to the library layer
//! 4. **Render**: remember the pane size for click hit-testing, then draw
//!
//! # Keybindings
//!
//! - `0`-`9`, `.`: digits and decimal point
//! - `+`, `-`, `*` or `x`, `/`: operators
//! - `Enter` or `=`: equals
//! - `Esc`, `c`: clear
//! - `%`: percent
//! - `n`: toggle sign
//! - `q`: hide the plugin
//!
//! While an error is shown, any key other than `q` (or any click) only
//! dismisses it.
//!
//! The plugin only exists on `wasm32`; other targets get an empty `main` so
//! the library can be built and tested natively.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
use plugin::State;

#[cfg(target_arch = "wasm32")]
register_plugin!(State);

#[cfg(target_arch = "wasm32")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use zcalc::{handle_event, Action, ButtonEvent, Config, Event};

    /// Plugin state wrapper.
    ///
    /// Wraps the library's `AppState` with the last pane size, which Zellij
    /// only reports to `render`.
    pub struct State {
        app: zcalc::AppState,
        rows: usize,
        cols: usize,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: zcalc::initialize(&Config::default()),
                rows: 0,
                cols: 0,
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, initializes state and subscribes to input.
        ///
        /// The calculator needs no permissions.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            zcalc::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();

            tracing::debug!(config = ?config, "parsed configuration");
            self.app = zcalc::initialize(&config);

            subscribe(&[EventType::Key, EventType::Mouse]);
            tracing::debug!("plugin load complete");
        }

        /// Handles incoming Zellij events. Returns `true` if the pane should
        /// re-render.
        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let _guard = tracing::debug_span!("plugin_update_event", event = ?event).entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                    Some(event) => event,
                    None => return false,
                },
                _ => return false,
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        display = %self.app.display,
                        "event handled"
                    );
                    for action in actions {
                        Self::execute_action(&action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::debug!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            self.rows = rows;
            self.cols = cols;
            zcalc::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        /// Maps keyboard events to application events.
        ///
        /// Keys without a button become [`Event::DismissError`], which only
        /// has an effect while an error is showing. Routing during the error
        /// modal is left entirely to `handle_event`.
        fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
            tracing::debug!(bare_key = ?key.bare_key, "key event");

            if key.key_modifiers.contains(&KeyModifier::Ctrl)
                || key.key_modifiers.contains(&KeyModifier::Alt)
            {
                return None;
            }

            if key.bare_key == BareKey::Char('q') {
                return Some(Event::CloseFocus);
            }

            let button = match key.bare_key {
                BareKey::Enter => Some(ButtonEvent::Equals),
                BareKey::Esc => Some(ButtonEvent::Clear),
                BareKey::Char(c) => ButtonEvent::from_key(c),
                _ => None,
            };
            Some(button.map_or(Event::DismissError, Event::Button))
        }

        /// Maps a left click to a 1-indexed pane cell.
        fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
            match mouse {
                Mouse::LeftClick(line, col) => {
                    let row = usize::try_from(line).ok()? + 1;
                    Some(Event::Click {
                        row,
                        col: col + 1,
                        rows: self.rows,
                        cols: self.cols,
                    })
                }
                _ => None,
            }
        }

        /// Translates library actions to Zellij API calls.
        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("hiding plugin pane");
                    hide_self();
                }
                Action::ReportError { message } => {
                    tracing::warn!(message = %message, "calculator error");
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
