use std::time::Instant;

use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::notification::{AttributeName, MessageBox, NotificationAttributes, NotificationKind, Timings};
use crate::settings::{KeyValueStore, Settings, ThemeMode, ThemePreference};
use crate::widgets::popup::Corner;

/// Label the `b` key puts on the action button
pub const CUSTOM_BUTTON_TEXT: &str = "Got it";

pub struct App {
    pub message_box: MessageBox,
    /// Attributes from the command line, reused by `respawn`
    pub initial_attributes: NotificationAttributes,
    pub theme: ThemePreference,
    pub settings: Settings<Box<dyn KeyValueStore>>,
    pub timings: Timings,
    pub position: Corner,
    pub layout_regions: LayoutRegions,
    /// Footer message, e.g. a config warning
    pub status: Option<String>,
    pub should_quit: bool,
    pub needs_render: bool,
}

impl App {
    pub fn new(
        attributes: NotificationAttributes,
        settings: Settings<Box<dyn KeyValueStore>>,
        config: &Config,
    ) -> Self {
        let timings = config.notification.timings();
        let theme = ThemePreference::on_page_load(&settings);

        Self {
            message_box: MessageBox::with_timings(attributes.clone(), timings),
            initial_attributes: attributes,
            theme,
            settings,
            timings,
            position: config.notification.position,
            layout_regions: LayoutRegions::new(),
            status: None,
            should_quit: false,
            needs_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    /// Attach the message box to the page
    pub fn mount(&mut self, now: Instant) {
        self.message_box.on_mount(now);
        self.mark_dirty();
    }

    /// Fire any due message box timers
    pub fn tick(&mut self, now: Instant) {
        if self.message_box.tick(now) {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Redraw when state changed or while the message box is animating
    pub fn should_render(&self) -> bool {
        self.needs_render || self.message_box.is_live()
    }

    pub fn toggle_theme(&mut self) {
        let mode = self.theme.toggle(&mut self.settings);
        log::debug!("theme toggled to {}", mode);
        self.mark_dirty();
    }

    pub fn set_kind(&mut self, kind: NotificationKind) {
        if self
            .message_box
            .set_attribute(AttributeName::Type.as_str(), kind.as_str())
        {
            self.mark_dirty();
        }
    }

    /// Alternate the button text between absent and `CUSTOM_BUTTON_TEXT`
    pub fn cycle_button_text(&mut self) {
        let name = AttributeName::ButtonText.as_str();
        let changed = if self
            .message_box
            .attributes()
            .get(AttributeName::ButtonText)
            .is_some()
        {
            self.message_box.remove_attribute(name)
        } else {
            self.message_box.set_attribute(name, CUSTOM_BUTTON_TEXT)
        };
        if changed {
            self.mark_dirty();
        }
    }

    /// Replace a removed message box with a fresh one. Returns false while
    /// the current box is still on the page.
    pub fn respawn(&mut self, now: Instant) -> bool {
        if !self.message_box.is_removed() {
            return false;
        }
        self.message_box = MessageBox::with_timings(self.initial_attributes.clone(), self.timings);
        self.mount(now);
        true
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
