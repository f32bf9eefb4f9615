//! Shared test utilities for msgbox
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{Terminal, backend::TestBackend};

    use crate::app::App;
    use crate::config::Config;
    use crate::notification::{ENTER_TRANSITION, NotificationAttributes};
    use crate::settings::{KeyValueStore, MemoryStore, Settings};

    pub const TEST_WIDTH: u16 = 80;
    pub const TEST_HEIGHT: u16 = 24;

    /// Helper to create App with default config and an in-memory settings store
    pub fn test_app() -> App {
        test_app_with(NotificationAttributes::new(), MemoryStore::new())
    }

    pub fn test_app_with(attributes: NotificationAttributes, store: MemoryStore) -> App {
        let store: Box<dyn KeyValueStore> = Box::new(store);
        App::new(attributes, Settings::new(store), &Config::default())
    }

    /// Mount the app's message box at `start` and run it until fully slid in.
    /// Returns the instant at which it rests in its corner.
    pub fn show_message_box(app: &mut App, start: Instant) -> Instant {
        app.mount(start);
        let activated = start + app.timings.entrance;
        app.tick(activated);
        activated + ENTER_TRANSITION
    }

    pub fn test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(TEST_WIDTH, TEST_HEIGHT)).unwrap()
    }

    /// Draw one frame at `now`
    pub fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App, now: Instant) {
        terminal.draw(|frame| app.render_at(frame, now)).unwrap();
    }

    pub fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Left button press at the given cell
    pub fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }
}
