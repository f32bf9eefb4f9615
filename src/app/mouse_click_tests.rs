//! Tests for mouse click handling

use std::time::Instant;

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::App;
use crate::app::mouse_events::handle_mouse_event;
use crate::notification::Phase;
use crate::settings::ThemeMode;
use crate::test_utils::test_helpers::{click, draw, show_message_box, test_app, test_terminal};

/// Render a resting box and return the instant it was drawn at
fn rendered_app() -> (App, Instant) {
    let mut app = test_app();
    let now = show_message_box(&mut app, Instant::now());
    let mut terminal = test_terminal();
    draw(&mut terminal, &mut app, now);
    (app, now)
}

fn click_rect(app: &mut App, rect: Option<Rect>, now: Instant) {
    let rect = rect.expect("region recorded");
    handle_mouse_event(app, click(rect.x, rect.y), now);
}

#[test]
fn test_click_primary_dot_dismisses() {
    let (mut app, now) = rendered_app();
    let rect = app.layout_regions.dismiss_primary;
    click_rect(&mut app, rect, now);
    assert_eq!(app.message_box.phase(), Phase::Exiting);
}

#[test]
fn test_click_secondary_dot_dismisses() {
    let (mut app, now) = rendered_app();
    let rect = app.layout_regions.dismiss_secondary;
    click_rect(&mut app, rect, now);
    assert_eq!(app.message_box.phase(), Phase::Exiting);
}

#[test]
fn test_click_button_dismisses() {
    let (mut app, now) = rendered_app();
    let rect = app.layout_regions.action_button;
    click_rect(&mut app, rect, now);
    assert_eq!(app.message_box.phase(), Phase::Exiting);
}

#[test]
fn test_click_box_body_does_nothing() {
    let (mut app, now) = rendered_app();
    let rect = app.layout_regions.message_box.unwrap();
    // Bottom-left corner of the border
    handle_mouse_event(&mut app, click(rect.x, rect.bottom() - 1), now);
    assert_eq!(app.message_box.phase(), Phase::Active);
}

#[test]
fn test_second_click_after_dismiss_is_ignored() {
    let (mut app, now) = rendered_app();
    let rect = app.layout_regions.action_button;
    click_rect(&mut app, rect, now);
    let deadline = app.message_box.next_deadline();

    // Regions are stale until the next render
    click_rect(&mut app, rect, now + std::time::Duration::from_millis(100));
    assert_eq!(app.message_box.phase(), Phase::Exiting);
    assert_eq!(app.message_box.next_deadline(), deadline);
}

#[test]
fn test_click_theme_switch_toggles() {
    let (mut app, now) = rendered_app();
    let rect = app.layout_regions.theme_switch;
    click_rect(&mut app, rect, now);
    assert_eq!(app.theme_mode(), ThemeMode::Light);
    assert_eq!(app.message_box.phase(), Phase::Active);
}

#[test]
fn test_right_click_ignored() {
    let (mut app, now) = rendered_app();
    let rect = app.layout_regions.action_button.unwrap();
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        ..click(rect.x, rect.y)
    };
    handle_mouse_event(&mut app, mouse, now);
    assert_eq!(app.message_box.phase(), Phase::Active);
}

#[test]
fn test_click_during_slide_in_misses() {
    let mut app = test_app();
    let t0 = Instant::now();
    app.mount(t0);
    let entered = t0 + app.timings.entrance;
    app.tick(entered);

    let mut terminal = test_terminal();
    draw(&mut terminal, &mut app, entered);

    assert!(app.layout_regions.action_button.is_none());
    handle_mouse_event(&mut app, click(60, 21), entered);
    assert_eq!(app.message_box.phase(), Phase::Active);
}
