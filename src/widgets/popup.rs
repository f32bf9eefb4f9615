use ratatui::layout::Rect;
use serde::Deserialize;

/// Screen corner a floating box is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl Corner {
    pub fn is_right(self) -> bool {
        matches!(self, Corner::BottomRight | Corner::TopRight)
    }
}

/// Rect of `width` x `height` anchored to a corner of `frame_area`,
/// `margin_x` / `margin_y` cells away from the edges.
///
/// Clamped to the frame when it does not fit.
pub fn corner_popup(
    frame_area: Rect,
    width: u16,
    height: u16,
    corner: Corner,
    margin_x: u16,
    margin_y: u16,
) -> Rect {
    let popup_width = width.min(frame_area.width.saturating_sub(margin_x * 2));
    let popup_height = height.min(frame_area.height.saturating_sub(margin_y * 2));

    let left = frame_area.x + margin_x.min(frame_area.width);
    let right = (frame_area.x + frame_area.width).saturating_sub(popup_width + margin_x);
    let top = frame_area.y + margin_y.min(frame_area.height);
    let bottom = (frame_area.y + frame_area.height).saturating_sub(popup_height + margin_y);

    let (x, y) = match corner {
        Corner::BottomRight => (right, bottom),
        Corner::BottomLeft => (left, bottom),
        Corner::TopRight => (right, top),
        Corner::TopLeft => (left, top),
    };

    Rect {
        x,
        y,
        width: popup_width,
        height: popup_height,
    }
}
