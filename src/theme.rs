//! Centralized colors and styles for all UI components.
//!
//! The host page and the message box draw from separate modules. The page
//! palette follows the persisted light/dark mode; the message box palette is
//! fixed so the page theme never bleeds into the box (and vice versa).
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files

use ratatui::style::{Color, Modifier, Style};

use crate::notification::{Accent, NotificationKind};
use crate::settings::ThemeMode;

/// Host page styles, one set per theme mode
pub mod page {
    use super::*;

    pub struct PageColors {
        pub bg: Color,
        pub fg: Color,
        pub muted: Color,
        pub accent: Color,
        pub border: Color,
        pub warning: Color,
    }

    pub const DARK: PageColors = PageColors {
        bg: Color::Rgb(26, 26, 46),
        fg: Color::Rgb(236, 236, 244),
        muted: Color::Rgb(130, 133, 158),
        accent: Color::Rgb(189, 147, 249),
        border: Color::Rgb(90, 92, 119),
        warning: Color::Rgb(255, 217, 61),
    };

    pub const LIGHT: PageColors = PageColors {
        bg: Color::Rgb(246, 246, 250),
        fg: Color::Rgb(40, 42, 54),
        muted: Color::Rgb(110, 112, 130),
        accent: Color::Rgb(98, 70, 234),
        border: Color::Rgb(190, 192, 204),
        warning: Color::Rgb(176, 120, 0),
    };

    pub fn colors(mode: ThemeMode) -> &'static PageColors {
        match mode {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }

    // Theme switch knob
    pub const SWITCH_ON: Color = Color::Rgb(107, 203, 119);
    pub const SWITCH_OFF: Color = Color::Rgb(130, 133, 158);
}

/// Message box styles, independent of the page theme
pub mod notification {
    use super::*;

    // Box backgrounds per kind
    pub const SUCCESS_BG: Color = Color::Rgb(176, 219, 125);
    pub const ERROR_BG: Color = Color::Rgb(239, 141, 156);
    pub const INFO_BG: Color = Color::Rgb(111, 177, 252);
    pub const WARNING_BG: Color = Color::Rgb(255, 209, 102);

    pub const BORDER: Color = Color::Rgb(203, 205, 211);

    pub const TITLE: Style = Style::new()
        .fg(Color::Rgb(252, 252, 252))
        .add_modifier(Modifier::BOLD);
    pub const BODY: Color = Color::Rgb(93, 93, 93);

    // Dismiss dots
    pub const DOT: Color = Color::Rgb(252, 252, 252);
    pub const DOT_DIM: Modifier = Modifier::DIM;
    pub const FOCUSED: Modifier = Modifier::REVERSED;

    // Face and its shadow
    pub const FACE_FG: Color = Color::Rgb(119, 119, 119);
    pub const SHADOW: Color = Color::Rgb(119, 119, 119);

    // Action button
    pub const BUTTON_BG: Color = Color::Rgb(252, 252, 252);

    // Button label accents
    pub const GREEN: Color = Color::Rgb(78, 192, 125);
    pub const RED: Color = Color::Rgb(233, 96, 117);
    pub const BLUE: Color = Color::Rgb(111, 177, 252);
    pub const YELLOW: Color = Color::Rgb(255, 209, 102);

    pub fn background(kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Success => SUCCESS_BG,
            NotificationKind::Error => ERROR_BG,
            NotificationKind::Warning => WARNING_BG,
            NotificationKind::Info => INFO_BG,
        }
    }

    pub fn accent(accent: Accent) -> Color {
        match accent {
            Accent::Green => GREEN,
            Accent::Red => RED,
            Accent::Yellow => YELLOW,
            Accent::Blue => BLUE,
        }
    }
}
