//! Notification kinds and the presentation derived from them
//!
//! Every visual decision the message box makes (background, face, shadow,
//! button accent, default button label) is a pure function of its kind.

use std::fmt;
use std::time::Duration;

/// Semantic category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Info,
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Warning,
    ];

    /// Resolve a `type` attribute value.
    ///
    /// Matching is exact and case-sensitive. Anything unrecognized is `Info`.
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            "warning" => NotificationKind::Warning,
            _ => NotificationKind::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
        }
    }

    /// Presentation row for this kind
    pub fn presentation(self) -> Presentation {
        match self {
            NotificationKind::Success => Presentation {
                visual_class: "success",
                face: FaceVariant::Bounce1,
                mouth: Mouth::Happy,
                shadow: ShadowMotion::Scale,
                accent: Accent::Green,
                default_label: "continue",
            },
            NotificationKind::Error => Presentation {
                visual_class: "error",
                face: FaceVariant::Bounce2,
                mouth: Mouth::Sad,
                shadow: ShadowMotion::Move,
                accent: Accent::Red,
                default_label: "try again",
            },
            NotificationKind::Warning => Presentation {
                visual_class: "warning",
                face: FaceVariant::ScalePulse,
                mouth: Mouth::Neutral,
                shadow: ShadowMotion::Scale,
                accent: Accent::Yellow,
                default_label: "understand",
            },
            NotificationKind::Info => Presentation {
                visual_class: "info",
                face: FaceVariant::Bounce3,
                mouth: Mouth::Surprised,
                shadow: ShadowMotion::Scale,
                accent: Accent::Blue,
                default_label: "ok",
            },
        }
    }
}

impl From<&str> for NotificationKind {
    fn from(value: &str) -> Self {
        NotificationKind::parse(value)
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Animated face drawn in the upper half of the box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceVariant {
    /// Quick vertical bounce
    Bounce1,
    /// Slow horizontal roll across the box
    Bounce2,
    /// Shrink-and-grow pulse
    ScalePulse,
    /// Slow vertical bounce
    Bounce3,
}

impl FaceVariant {
    pub fn class_name(self) -> &'static str {
        match self {
            FaceVariant::Bounce1 => "bounce-1",
            FaceVariant::Bounce2 => "bounce-2",
            FaceVariant::ScalePulse => "scale-pulse",
            FaceVariant::Bounce3 => "bounce-3",
        }
    }

    /// Length of one full animation cycle
    pub fn period(self) -> Duration {
        match self {
            FaceVariant::Bounce1 => Duration::from_millis(1000),
            FaceVariant::Bounce2 => Duration::from_millis(3000),
            FaceVariant::ScalePulse => Duration::from_millis(1500),
            FaceVariant::Bounce3 => Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mouth {
    Happy,
    Sad,
    Neutral,
    Surprised,
}

impl Mouth {
    pub fn glyph(self) -> char {
        match self {
            Mouth::Happy => 'u',
            Mouth::Sad => 'n',
            Mouth::Neutral => '-',
            Mouth::Surprised => 'o',
        }
    }
}

/// Motion of the shadow drawn under the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowMotion {
    /// Pulses in width under a stationary face
    Scale,
    /// Travels sideways, following a rolling face
    Move,
}

impl ShadowMotion {
    pub fn class_name(self) -> &'static str {
        match self {
            ShadowMotion::Scale => "scale",
            ShadowMotion::Move => "move",
        }
    }

    pub fn period(self) -> Duration {
        match self {
            ShadowMotion::Scale => Duration::from_millis(1000),
            ShadowMotion::Move => Duration::from_millis(3000),
        }
    }
}

/// Accent color of the action button label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Green,
    Red,
    Yellow,
    Blue,
}

impl Accent {
    pub fn name(self) -> &'static str {
        match self {
            Accent::Green => "green",
            Accent::Red => "red",
            Accent::Yellow => "yellow",
            Accent::Blue => "blue",
        }
    }
}

/// Everything the renderer needs to know about a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub visual_class: &'static str,
    pub face: FaceVariant,
    pub mouth: Mouth,
    pub shadow: ShadowMotion,
    pub accent: Accent,
    pub default_label: &'static str,
}

impl Default for Presentation {
    fn default() -> Self {
        NotificationKind::Info.presentation()
    }
}

#[cfg(test)]
#[path = "notification_kind_tests.rs"]
mod notification_kind_tests;
