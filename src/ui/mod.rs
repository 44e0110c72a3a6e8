//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: renderable snapshot of one frame
//! - [`layout`]: screen geometry shared by drawing and click hit-testing
//! - [`renderer`]: top-level rendering entry point
//! - [`components`]: header, display, keypad, modal and footer renderers
//! - [`helpers`]: cursor positioning and padding
//! - [`theme`]: color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{KeypadCell, KeypadLayout};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{ButtonItem, DisplayInfo, ErrorModal, FooterInfo, HeaderInfo, UIViewModel};
