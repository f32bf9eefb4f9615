//! Message box input attributes
//!
//! Attributes are raw, optional strings. Defaults are applied when they are
//! read, never when they are stored, so a later change can always be
//! compared against what the caller actually supplied.

use super::notification_kind::NotificationKind;

pub const DEFAULT_TITLE: &str = "Notification";
pub const DEFAULT_BODY: &str = "This is a notification message.";

/// The observed attribute names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeName {
    Title,
    Type,
    Body,
    ButtonText,
}

impl AttributeName {
    pub const OBSERVED: [AttributeName; 4] = [
        AttributeName::Title,
        AttributeName::Type,
        AttributeName::Body,
        AttributeName::ButtonText,
    ];

    /// Returns `None` for attributes the message box does not observe
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(AttributeName::Title),
            "type" => Some(AttributeName::Type),
            "body" => Some(AttributeName::Body),
            "button-text" => Some(AttributeName::ButtonText),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttributeName::Title => "title",
            AttributeName::Type => "type",
            AttributeName::Body => "body",
            AttributeName::ButtonText => "button-text",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationAttributes {
    title: Option<String>,
    kind: Option<String>,
    body: Option<String>,
    button_text: Option<String>,
}

impl NotificationAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self
    }

    /// Raw value as supplied, without defaults
    pub fn get(&self, name: AttributeName) -> Option<&str> {
        match name {
            AttributeName::Title => self.title.as_deref(),
            AttributeName::Type => self.kind.as_deref(),
            AttributeName::Body => self.body.as_deref(),
            AttributeName::ButtonText => self.button_text.as_deref(),
        }
    }

    /// Replace a raw value. `None` removes the attribute.
    pub fn set(&mut self, name: AttributeName, value: Option<String>) {
        let slot = match name {
            AttributeName::Title => &mut self.title,
            AttributeName::Type => &mut self.kind,
            AttributeName::Body => &mut self.body,
            AttributeName::ButtonText => &mut self.button_text,
        };
        *slot = value;
    }

    /// Title to display. Empty counts as absent.
    pub fn title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(DEFAULT_TITLE)
    }

    pub fn kind(&self) -> NotificationKind {
        non_empty(self.kind.as_deref())
            .map(NotificationKind::parse)
            .unwrap_or_default()
    }

    /// Body to display. Empty counts as absent.
    pub fn body(&self) -> &str {
        non_empty(self.body.as_deref()).unwrap_or(DEFAULT_BODY)
    }

    /// Button label: an explicit `button-text` wins even when empty,
    /// otherwise the kind's default label.
    pub fn button_label(&self) -> &str {
        match self.button_text.as_deref() {
            Some(text) => text,
            None => self.kind().presentation().default_label,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "notification_attributes_tests.rs"]
mod notification_attributes_tests;
