//! Message box rendering
//!
//! The box is drawn into its own scratch buffer and then copied onto the
//! frame at its (possibly sliding) position. Every cell it covers is taken
//! from the scratch buffer, so nothing of the page shows through and nothing
//! of the box depends on page styles.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::notification_kind::{FaceVariant, Mouth, ShadowMotion};
use super::notification_lifecycle::VisualState;
use super::notification_state::MessageBox;
use super::notification_view::{Affordance, NotificationView, WidgetTarget};
use crate::layout::LayoutRegions;
use crate::theme;
use crate::widgets::popup::{self, Corner};

pub const BOX_WIDTH: u16 = 32;
pub const BOX_HEIGHT: u16 = 13;
const MARGIN_X: u16 = 3;
const MARGIN_Y: u16 = 1;

// Rows inside the border
const DOTS_ROW: u16 = 0;
const FACE_ROW: u16 = 2;
const SHADOW_ROW: u16 = 5;
const TITLE_ROW: u16 = 6;
const BODY_ROW: u16 = 7;
const BODY_HEIGHT: u16 = 2;
const BUTTON_ROW: u16 = 10;

/// Cells the rolling face and moving shadow travel either side of center
const ROLL_DISTANCE: f32 = 6.0;

/// Interactive parts of a drawn box, relative to the box's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxTargets {
    pub dismiss_primary: Rect,
    pub dismiss_secondary: Rect,
    pub action_button: Rect,
}

/// Render the message box over whatever is already in the frame
///
/// Should be called after the page so the box appears on top. Hit regions
/// are recorded only while the box rests in its corner.
pub fn render_message_box(
    frame: &mut Frame,
    message_box: &MessageBox,
    corner: Corner,
    now: Instant,
    regions: &mut LayoutRegions,
) {
    let slide = match message_box.visual_state(now) {
        VisualState::Hidden | VisualState::Removed => return,
        VisualState::Entering(progress) => 1.0 - progress,
        VisualState::Shown => 0.0,
        VisualState::Exiting(progress) => progress,
    };
    let Some(view) = message_box.view() else {
        return;
    };

    let frame_area = frame.area();
    let home = popup::corner_popup(frame_area, BOX_WIDTH, BOX_HEIGHT, corner, MARGIN_X, MARGIN_Y);

    // Don't render if the box does not fit
    if home.width < BOX_WIDTH || home.height < BOX_HEIGHT {
        return;
    }

    let elapsed = message_box
        .activated_at()
        .map(|at| now.saturating_duration_since(at))
        .unwrap_or_default();

    let local = Rect::new(0, 0, BOX_WIDTH, BOX_HEIGHT);
    let mut scratch = Buffer::empty(local);
    let targets = draw_box(&mut scratch, view, message_box.focus(), elapsed);

    let dx = slide_offset(frame_area, home, corner, slide);
    blit(frame.buffer_mut(), &scratch, home, dx);

    if dx == 0 {
        regions.message_box = Some(home);
        regions.dismiss_primary = Some(translate(targets.dismiss_primary, home));
        regions.dismiss_secondary = Some(translate(targets.dismiss_secondary, home));
        regions.action_button = Some(translate(targets.action_button, home));
    }
}

/// Draw the whole box into `buf`, whose area is the box itself
pub fn draw_box(
    buf: &mut Buffer,
    view: &NotificationView,
    focus: Option<WidgetTarget>,
    elapsed: Duration,
) -> BoxTargets {
    let area = buf.area;
    let bg = theme::notification::background(view.kind);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::notification::BORDER).bg(bg))
        .style(Style::default().fg(theme::notification::DOT).bg(bg));
    let inner = block.inner(area);
    block.render(area, buf);

    let dismiss_primary = Rect::new(inner.right().saturating_sub(3), inner.y + DOTS_ROW, 1, 1);
    let dismiss_secondary = Rect::new(inner.right().saturating_sub(5), inner.y + DOTS_ROW, 1, 1);
    for affordance in &view.affordances {
        let rect = match affordance.affordance {
            Affordance::Primary => dismiss_primary,
            Affordance::Secondary => dismiss_secondary,
        };
        let mut style = Style::default().fg(theme::notification::DOT).bg(bg);
        if affordance.de_emphasized {
            style = style.add_modifier(theme::notification::DOT_DIM);
        }
        if focus == Some(WidgetTarget::Dismiss(affordance.affordance)) {
            style = style.add_modifier(theme::notification::FOCUSED);
        }
        buf.set_string(rect.x, rect.y, "●", style);
    }

    draw_face(buf, inner, view, elapsed, bg);

    let title = Line::from(display_title(&view.title, inner.width))
        .style(theme::notification::TITLE.bg(bg));
    Paragraph::new(title)
        .alignment(Alignment::Center)
        .render(Rect::new(inner.x, inner.y + TITLE_ROW, inner.width, 1), buf);

    let body_area = Rect::new(
        inner.x + 1,
        inner.y + BODY_ROW,
        inner.width.saturating_sub(2),
        BODY_HEIGHT,
    );
    Paragraph::new(view.body.as_str())
        .style(Style::default().fg(theme::notification::BODY).bg(bg))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(body_area, buf);

    let action_button = draw_button(buf, inner, view, focus == Some(WidgetTarget::ActionButton));

    BoxTargets {
        dismiss_primary,
        dismiss_secondary,
        action_button,
    }
}

fn draw_button(buf: &mut Buffer, inner: Rect, view: &NotificationView, focused: bool) -> Rect {
    let label = view.button_label.to_uppercase();
    let label_width = u16::try_from(Line::from(label.as_str()).width()).unwrap_or(u16::MAX);
    let width = label_width
        .saturating_add(4)
        .max(inner.width / 2)
        .min(inner.width);
    let rect = Rect::new(
        inner.x + (inner.width - width) / 2,
        inner.y + BUTTON_ROW,
        width,
        1,
    );

    let mut style = Style::default()
        .fg(theme::notification::accent(view.presentation.accent))
        .bg(theme::notification::BUTTON_BG)
        .add_modifier(Modifier::BOLD);
    if focused {
        style = style.add_modifier(theme::notification::FOCUSED);
    }

    Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .render(rect, buf);
    rect
}

fn draw_face(buf: &mut Buffer, inner: Rect, view: &NotificationView, elapsed: Duration, bg: Color) {
    let motion = face_motion(view.presentation.face, elapsed);
    let lines = face_lines(view.presentation.mouth, motion.shrunk);
    let style = Style::default().fg(theme::notification::FACE_FG).bg(bg);

    let face_width = lines[0].chars().count() as i32;
    let center_x = i32::from(inner.x) + i32::from(inner.width) / 2;
    let x = center_x - face_width / 2 + motion.dx;
    let y = i32::from(inner.y + FACE_ROW) + motion.dy;
    for (i, line) in lines.iter().enumerate() {
        put(buf, inner, x, y + i as i32, line, style);
    }

    let (shadow_width, shadow_dx) = shadow_motion(view.presentation.shadow, elapsed);
    let shadow = "▁".repeat(shadow_width);
    let shadow_x = center_x - shadow_width as i32 / 2 + shadow_dx;
    put(
        buf,
        inner,
        shadow_x,
        i32::from(inner.y + SHADOW_ROW),
        &shadow,
        Style::default().fg(theme::notification::SHADOW).bg(bg),
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct FaceMotion {
    dx: i32,
    dy: i32,
    shrunk: bool,
}

fn face_motion(variant: FaceVariant, elapsed: Duration) -> FaceMotion {
    let t = cycle_position(elapsed, variant.period());
    let mid_cycle = (0.25..0.75).contains(&t);
    match variant {
        FaceVariant::Bounce1 | FaceVariant::Bounce3 => FaceMotion {
            dy: if mid_cycle { -1 } else { 0 },
            ..FaceMotion::default()
        },
        FaceVariant::Bounce2 => FaceMotion {
            dx: roll_offset(t),
            ..FaceMotion::default()
        },
        FaceVariant::ScalePulse => FaceMotion {
            shrunk: mid_cycle,
            ..FaceMotion::default()
        },
    }
}

/// Shadow width and horizontal offset
fn shadow_motion(motion: ShadowMotion, elapsed: Duration) -> (usize, i32) {
    let t = cycle_position(elapsed, motion.period());
    match motion {
        ShadowMotion::Scale if (0.25..0.75).contains(&t) => (3, 0),
        ShadowMotion::Scale => (5, 0),
        ShadowMotion::Move => (5, roll_offset(t)),
    }
}

fn face_lines(mouth: Mouth, shrunk: bool) -> [String; 3] {
    let glyph = mouth.glyph();
    if shrunk {
        [
            "  .-.  ".to_string(),
            " (o o) ".to_string(),
            format!("  '{}'  ", glyph),
        ]
    } else {
        [
            " .---. ".to_string(),
            "( o o )".to_string(),
            format!(" '-{}-' ", glyph),
        ]
    }
}

/// Fraction of the way through the current cycle, in `0.0..1.0`
fn cycle_position(elapsed: Duration, period: Duration) -> f32 {
    let period_ms = period.as_millis();
    if period_ms == 0 {
        return 0.0;
    }
    (elapsed.as_millis() % period_ms) as f32 / period_ms as f32
}

/// Travels from the left extreme to the right and back over one cycle
fn roll_offset(t: f32) -> i32 {
    let triangle = 1.0 - (2.0 * t - 1.0).abs();
    (-ROLL_DISTANCE + 2.0 * ROLL_DISTANCE * triangle).round() as i32
}

/// Uppercase, letter-spaced when there is room
fn display_title(title: &str, width: u16) -> String {
    let upper = title.to_uppercase();
    let count = upper.chars().count();
    if count > 0 && count * 2 - 1 <= usize::from(width) {
        upper
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        upper
    }
}

/// Write `text` at a signed position, clipped to `clip`
fn put(buf: &mut Buffer, clip: Rect, x: i32, y: i32, text: &str, style: Style) {
    let Ok(y) = u16::try_from(y) else {
        return;
    };
    for (i, ch) in text.chars().enumerate() {
        let Ok(cx) = u16::try_from(x + i as i32) else {
            continue;
        };
        if !clip.contains(Position::new(cx, y)) {
            continue;
        }
        if let Some(cell) = buf.cell_mut((cx, y)) {
            cell.set_char(ch).set_style(style);
        }
    }
}

/// Horizontal distance the box is pushed toward its screen edge
fn slide_offset(frame_area: Rect, home: Rect, corner: Corner, slide: f32) -> i32 {
    if corner.is_right() {
        let travel = i32::from(frame_area.right()) - i32::from(home.x);
        (travel as f32 * slide).round() as i32
    } else {
        let travel = i32::from(home.right()) - i32::from(frame_area.x);
        -((travel as f32 * slide).round() as i32)
    }
}

/// Copy `source` onto `target` at `home` shifted by `dx`, clipped to `target`
fn blit(target: &mut Buffer, source: &Buffer, home: Rect, dx: i32) {
    let bounds = target.area;
    for y in 0..source.area.height {
        for x in 0..source.area.width {
            let Ok(tx) = u16::try_from(i32::from(home.x) + dx + i32::from(x)) else {
                continue;
            };
            let ty = home.y + y;
            if !bounds.contains(Position::new(tx, ty)) {
                continue;
            }
            if let (Some(src), Some(dst)) = (source.cell((x, y)), target.cell_mut((tx, ty))) {
                *dst = src.clone();
            }
        }
    }
}

fn translate(rect: Rect, origin: Rect) -> Rect {
    Rect::new(origin.x + rect.x, origin.y + rect.y, rect.width, rect.height)
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
