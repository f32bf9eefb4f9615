//! Message box component state
//!
//! `MessageBox` ties together attributes, the rendered view, the lifecycle
//! and keyboard focus. It exposes the component capabilities the host needs:
//! mount, attribute change (re-render) and teardown.

use std::time::Instant;

use ratatui::crossterm::event::KeyCode;

use super::notification_attributes::{AttributeName, NotificationAttributes};
use super::notification_lifecycle::{DismissTrigger, Lifecycle, Phase, Timings, VisualState};
use super::notification_view::{self, NotificationView, WidgetTarget};

#[derive(Debug, Clone)]
pub struct MessageBox {
    attributes: NotificationAttributes,
    view: Option<NotificationView>,
    lifecycle: Lifecycle,
    focus: Option<WidgetTarget>,
    render_count: u32,
}

impl MessageBox {
    pub fn new(attributes: NotificationAttributes) -> Self {
        Self::with_timings(attributes, Timings::default())
    }

    pub fn with_timings(attributes: NotificationAttributes, timings: Timings) -> Self {
        Self {
            attributes,
            view: None,
            lifecycle: Lifecycle::new(timings),
            focus: None,
            render_count: 0,
        }
    }

    /// Attach to the page: render and start the lifecycle timers.
    pub fn on_mount(&mut self, now: Instant) {
        if !self.lifecycle.mount(now) {
            return;
        }
        log::debug!(
            "message box mounted: kind={} title={:?}",
            self.attributes.kind(),
            self.attributes.title()
        );
        self.render_and_bind();
    }

    /// Attribute change notification.
    ///
    /// Unobserved names and unchanged values are ignored. A change while
    /// mounted re-renders and rebinds; the phase and every pending timer
    /// are left alone. Returns true if the stored attributes changed.
    pub fn on_attribute_change(&mut self, name: &str, old: Option<&str>, new: Option<&str>) -> bool {
        let Some(attribute) = AttributeName::parse(name) else {
            return false;
        };
        if old == new {
            return false;
        }

        self.attributes.set(attribute, new.map(str::to_string));

        if self.lifecycle.is_mounted() && !self.is_removed() {
            log::debug!("attribute {} changed, re-rendering", attribute.as_str());
            self.render_and_bind();
        }
        true
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        let old = self.raw_attribute(name);
        self.on_attribute_change(name, old.as_deref(), Some(value))
    }

    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let old = self.raw_attribute(name);
        self.on_attribute_change(name, old.as_deref(), None)
    }

    /// Shared dismissal path for every trigger. Returns true only for the
    /// trigger that started the exit.
    pub fn dismiss(&mut self, trigger: DismissTrigger, now: Instant) -> bool {
        if self.lifecycle.dismiss(trigger, now) {
            self.focus = None;
            return true;
        }
        false
    }

    /// Click on an interactive element. Returns true if it started the exit.
    pub fn handle_click(&mut self, target: WidgetTarget, now: Instant) -> bool {
        if !self.is_interactive() {
            return false;
        }
        let trigger = match target {
            WidgetTarget::Dismiss(affordance) => DismissTrigger::AffordanceClick(affordance),
            WidgetTarget::ActionButton => DismissTrigger::ActionButton,
        };
        self.dismiss(trigger, now)
    }

    /// Key press routed to the box. Returns true if the key was consumed.
    ///
    /// Tab/BackTab move focus. Enter activates a focused dismiss dot; Enter
    /// or Space activates the focused button.
    pub fn handle_key(&mut self, code: KeyCode, now: Instant) -> bool {
        if !self.is_interactive() {
            return false;
        }
        match code {
            KeyCode::Tab => {
                self.focus_next();
                true
            }
            KeyCode::BackTab => {
                self.focus_prev();
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let Some(target) = self.focus else {
                    return false;
                };
                match (target, code) {
                    (WidgetTarget::Dismiss(affordance), KeyCode::Enter) => {
                        self.dismiss(DismissTrigger::AffordanceKey(affordance), now);
                        true
                    }
                    (WidgetTarget::ActionButton, _) => {
                        self.dismiss(DismissTrigger::ActionButton, now);
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Fire due timers. Returns true if the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.lifecycle.tick(now);
        if changed && self.is_removed() {
            self.view = None;
            self.focus = None;
        }
        changed
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(WidgetTarget::FOCUS_ORDER.len() - 1);
    }

    pub fn focus(&self) -> Option<WidgetTarget> {
        self.focus
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    pub fn is_removed(&self) -> bool {
        self.phase() == Phase::Removed
    }

    /// Mounted and not yet removed: something is, or is about to be, on screen
    pub fn is_live(&self) -> bool {
        self.is_mounted() && !self.is_removed()
    }

    pub fn attributes(&self) -> &NotificationAttributes {
        &self.attributes
    }

    /// Current view; `None` before mount and after removal
    pub fn view(&self) -> Option<&NotificationView> {
        self.view.as_ref()
    }

    /// Number of times the view has been built
    pub fn render_count(&self) -> u32 {
        self.render_count
    }

    pub fn visual_state(&self, now: Instant) -> VisualState {
        self.lifecycle.visual_state(now)
    }

    pub fn activated_at(&self) -> Option<Instant> {
        self.lifecycle.activated_at()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.lifecycle.next_deadline()
    }

    /// Dismissed boxes take no more clicks or keys while they slide out
    fn is_interactive(&self) -> bool {
        self.is_mounted()
            && matches!(self.phase(), Phase::Created | Phase::Active)
            && self.view.is_some()
    }

    fn raw_attribute(&self, name: &str) -> Option<String> {
        AttributeName::parse(name)
            .and_then(|attribute| self.attributes.get(attribute))
            .map(str::to_string)
    }

    /// Replace the view and drop handlers bound to the old one
    fn render_and_bind(&mut self) {
        self.view = Some(notification_view::render(&self.attributes));
        self.focus = None;
        self.render_count += 1;
    }

    fn move_focus(&mut self, step: usize) {
        let order = WidgetTarget::FOCUS_ORDER;
        let next = match self.focus.and_then(|f| order.iter().position(|t| *t == f)) {
            Some(index) => (index + step) % order.len(),
            None if step == 1 => 0,
            None => order.len() - 1,
        };
        self.focus = Some(order[next]);
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
