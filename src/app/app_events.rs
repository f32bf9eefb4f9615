use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;
use super::mouse_events;
use crate::notification::NotificationKind;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event, now);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event, now);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }

        self.tick(Instant::now());
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The message box gets first refusal on focus and activation keys
        if self.message_box.handle_key(key.code, now) {
            self.mark_dirty();
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('1') => self.set_kind(NotificationKind::Success),
            KeyCode::Char('2') => self.set_kind(NotificationKind::Error),
            KeyCode::Char('3') => self.set_kind(NotificationKind::Warning),
            KeyCode::Char('4') => self.set_kind(NotificationKind::Info),
            KeyCode::Char('b') => self.cycle_button_text(),
            KeyCode::Char('n') => {
                self.respawn(now);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
