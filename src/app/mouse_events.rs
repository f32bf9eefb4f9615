//! Mouse event dispatcher
//!
//! Routes mouse events to appropriate handlers based on position.

use std::time::Instant;

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use super::mouse_click;
use crate::layout::region_at;

/// Handle mouse events by routing to appropriate handlers
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        mouse_click::handle_click(app, region, now);
    }
}
