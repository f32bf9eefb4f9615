//! The message box's visual subtree
//!
//! `render` is a pure function from attributes to a view. The view is
//! replaced wholesale on every re-render; nothing inside it is mutated.

use super::notification_attributes::NotificationAttributes;
use super::notification_kind::{NotificationKind, Presentation};

/// One of the two dismiss dots in the top corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affordance {
    Primary,
    /// Same behavior as `Primary`, drawn dimmed
    Secondary,
}

/// Anything in the view that reacts to clicks or keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetTarget {
    Dismiss(Affordance),
    ActionButton,
}

impl WidgetTarget {
    /// Keyboard focus order
    pub const FOCUS_ORDER: [WidgetTarget; 3] = [
        WidgetTarget::Dismiss(Affordance::Primary),
        WidgetTarget::Dismiss(Affordance::Secondary),
        WidgetTarget::ActionButton,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissAffordance {
    pub affordance: Affordance,
    pub de_emphasized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub kind: NotificationKind,
    pub presentation: Presentation,
    pub title: String,
    pub body: String,
    pub button_label: String,
    pub affordances: [DismissAffordance; 2],
}

/// Build the view for the current attribute state
pub fn render(attributes: &NotificationAttributes) -> NotificationView {
    let kind = attributes.kind();
    NotificationView {
        kind,
        presentation: kind.presentation(),
        title: attributes.title().to_string(),
        body: attributes.body().to_string(),
        button_label: attributes.button_label().to_string(),
        affordances: [
            DismissAffordance {
                affordance: Affordance::Primary,
                de_emphasized: false,
            },
            DismissAffordance {
                affordance: Affordance::Secondary,
                de_emphasized: true,
            },
        ],
    }
}
