//! Notification module for msgbox
//!
//! Provides the message box: a self-rendering, self-expiring alert that
//! slides in, dismisses itself after a timeout or on user action, slides
//! out and detaches.

mod notification_attributes;
mod notification_kind;
mod notification_lifecycle;
mod notification_render;
mod notification_state;
mod notification_view;

pub use notification_attributes::{AttributeName, DEFAULT_BODY, DEFAULT_TITLE, NotificationAttributes};
pub use notification_kind::{Accent, FaceVariant, Mouth, NotificationKind, Presentation, ShadowMotion};
pub use notification_lifecycle::{DismissTrigger, ENTER_TRANSITION, Phase, Timings, VisualState};
pub use notification_render::{BOX_HEIGHT, BOX_WIDTH, BoxTargets, draw_box, render_message_box};
pub use notification_state::MessageBox;
pub use notification_view::{Affordance, DismissAffordance, NotificationView, WidgetTarget, render};
