use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::App;
use crate::notification::{Phase, render_message_box};
use crate::theme::page::{self, PageColors};

const SWITCH_LABEL: &str = "dark mode ";
const SWITCH_ON: &str = "( ●)";
const SWITCH_OFF: &str = "(● )";

const HELP_LINES: [(&str, &str); 7] = [
    ("Tab/Shift+Tab", "move focus in the message box"),
    ("Enter/Space", "activate the focused element"),
    ("1-4", "type: success / error / warning / info"),
    ("b", "toggle custom button text"),
    ("n", "new message box once the last one is gone"),
    ("t", "toggle light/dark mode"),
    ("q/Esc", "quit"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.render_at(frame, Instant::now());
    }

    /// Draw the page, then the message box on top of it
    pub fn render_at(&mut self, frame: &mut Frame, now: Instant) {
        self.layout_regions.clear();

        let colors = page::colors(self.theme.mode());
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(colors.bg).fg(colors.fg)),
            area,
        );
        self.layout_regions.page = Some(area);

        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(frame, header_area, colors);
        render_help(frame, body_area, colors);
        self.render_footer(frame, footer_area, colors);

        render_message_box(
            frame,
            &self.message_box,
            self.position,
            now,
            &mut self.layout_regions,
        );
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect, colors: &PageColors) {
        let title = Line::from(Span::styled(
            " msgbox",
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(title), area);

        let (knob, knob_color) = if self.theme.toggle_checked() {
            (SWITCH_ON, page::SWITCH_ON)
        } else {
            (SWITCH_OFF, page::SWITCH_OFF)
        };
        let width = (SWITCH_LABEL.chars().count() + knob.chars().count()) as u16;
        if area.width <= width {
            return;
        }

        let switch_area = Rect::new(area.right() - width - 1, area.y, width, 1);
        let switch = Line::from(vec![
            Span::styled(SWITCH_LABEL, Style::default().fg(colors.muted)),
            Span::styled(knob, Style::default().fg(knob_color)),
        ]);
        frame.render_widget(Paragraph::new(switch), switch_area);
        self.layout_regions.theme_switch = Some(switch_area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, colors: &PageColors) {
        let line = match &self.status {
            Some(status) => Line::from(Span::styled(
                format!(" {}", status),
                Style::default().fg(colors.warning),
            )),
            None => Line::from(Span::styled(
                format!(" message box: {}", phase_label(self.message_box.phase())),
                Style::default().fg(colors.muted),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_help(frame: &mut Frame, area: Rect, colors: &PageColors) {
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!(" {:<14}", keys), Style::default().fg(colors.accent)),
                Span::styled(*action, Style::default().fg(colors.fg)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.border))
        .title(" Keys ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Created => "created",
        Phase::Active => "active",
        Phase::Exiting => "exiting",
        Phase::Removed => "removed (press n for a new one)",
    }
}
