//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` for one frame
//! and consumed by the renderer. They carry display-ready strings and
//! geometry, never calculator logic.

use crate::domain::ButtonKind;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub display: DisplayInfo,
    pub keypad: Vec<ButtonItem>,
    pub footer: FooterInfo,
    /// Present while an error is waiting to be acknowledged.
    pub error_modal: Option<ErrorModal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Contents of the display panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayInfo {
    /// Value shown on the display surface, at most 12 characters for
    /// anything the engine produces.
    pub value: String,
    /// Pending left operand and operator (e.g. `"7 ×"`), empty if none.
    pub expression: String,
}

/// One keypad button, positioned and styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonItem {
    pub label: String,
    pub kind: ButtonKind,
    /// This is the operator of the pending operation.
    pub is_active: bool,
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Error message shown over the keypad until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorModal {
    pub title: String,
    pub message: String,
    pub hint: String,
}
