//! Mouse click handling
//!
//! Activates the message box's dismiss dots and button, and the theme switch.

use std::time::Instant;

use super::app_state::App;
use crate::layout::Region;
use crate::notification::{Affordance, WidgetTarget};

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, now: Instant) {
    let target = match region {
        Some(Region::DismissPrimary) => WidgetTarget::Dismiss(Affordance::Primary),
        Some(Region::DismissSecondary) => WidgetTarget::Dismiss(Affordance::Secondary),
        Some(Region::ActionButton) => WidgetTarget::ActionButton,
        Some(Region::ThemeSwitch) => {
            app.toggle_theme();
            return;
        }
        // Clicks on the box body or the page do nothing
        _ => return,
    };

    if app.message_box.handle_click(target, now) {
        app.mark_dirty();
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
