//! Layout regions tracking for UI components
//!
//! Tracks where UI components are rendered for position-aware mouse interactions.

use ratatui::layout::Rect;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    // Host page
    Page,
    ThemeSwitch,

    // Message box and its interactive parts
    MessageBox,
    DismissPrimary,
    DismissSecondary,
    ActionButton,
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Regions are `None` when the component is not visible.
/// Used by mouse event handlers to determine which component is under the cursor.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub page: Option<Rect>,
    pub theme_switch: Option<Rect>,

    // Only populated while the message box is on screen
    pub message_box: Option<Rect>,
    pub dismiss_primary: Option<Rect>,
    pub dismiss_secondary: Option<Rect>,
    pub action_button: Option<Rect>,
}

impl LayoutRegions {
    /// Create a new empty LayoutRegions
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
