//! Rendering for the counter body.

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, STATUS_ERROR, STATUS_OK};

use super::state::{CounterState, CounterStatus};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Title, blank, buttons, blank, status.
const CONTENT_HEIGHT: u16 = 5;

const BUTTON_GAP: u16 = 2;

/// The three activatable controls, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterControl {
    #[default]
    Increment,
    Decrement,
    Fetch,
}

impl CounterControl {
    pub const ALL: [CounterControl; 3] = [
        CounterControl::Increment,
        CounterControl::Decrement,
        CounterControl::Fetch,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CounterControl::Increment => "Increment",
            CounterControl::Decrement => "Decrement",
            CounterControl::Fetch => "Fetch Count",
        }
    }

    pub fn next(self) -> Self {
        match self {
            CounterControl::Increment => CounterControl::Decrement,
            CounterControl::Decrement => CounterControl::Fetch,
            CounterControl::Fetch => CounterControl::Increment,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CounterControl::Increment => CounterControl::Fetch,
            CounterControl::Decrement => CounterControl::Increment,
            CounterControl::Fetch => CounterControl::Decrement,
        }
    }

    fn width(&self) -> u16 {
        // "[ label ]"
        self.label().chars().count() as u16 + 4
    }
}

/// Screen regions of the counter body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    pub title: Rect,
    pub buttons: [Rect; 3],
    pub status: Rect,
}

/// Compute where each part of the counter is drawn inside `area`.
///
/// Content is centered vertically; buttons are centered as a row.
/// Every rect is clipped to `area`, so tiny terminals yield empty rects.
pub fn view_layout(area: Rect) -> ViewLayout {
    let top = area.y + area.height.saturating_sub(CONTENT_HEIGHT) / 2;
    let row = |offset: u16| Rect::new(area.x, top + offset, area.width, 1).intersection(area);

    let total_width = CounterControl::ALL.iter().map(CounterControl::width).sum::<u16>()
        + BUTTON_GAP * (CounterControl::ALL.len() as u16 - 1);
    let mut x = area.x + area.width.saturating_sub(total_width) / 2;
    let buttons = CounterControl::ALL.map(|control| {
        let rect = Rect::new(x, top + 2, control.width(), 1).intersection(area);
        x += control.width() + BUTTON_GAP;
        rect
    });

    ViewLayout {
        title: row(0),
        buttons,
        status: row(4),
    }
}

/// Which control, if any, sits at the given screen cell.
pub fn control_at(area: Rect, column: u16, row: u16) -> Option<CounterControl> {
    let layout = view_layout(area);
    CounterControl::ALL
        .into_iter()
        .zip(layout.buttons)
        .find(|(_, rect)| rect.contains(Position::new(column, row)))
        .map(|(control, _)| control)
}

/// Render the counter value, the controls and the fetch status into `area`.
pub fn render_counter(
    frame: &mut Frame,
    area: Rect,
    state: &CounterState,
    focused: CounterControl,
    animation_tick: u8,
) {
    let layout = view_layout(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!("Count: {}", state.value),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    for (control, rect) in CounterControl::ALL.into_iter().zip(layout.buttons) {
        frame.render_widget(button(control, control == focused), rect);
    }

    if let Some(line) = status_line(state.status, animation_tick) {
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), layout.status);
    }
}

fn button(control: CounterControl, focused: bool) -> Paragraph<'static> {
    let style = if focused {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Paragraph::new(Span::styled(format!("[ {} ]", control.label()), style))
}

fn status_line(status: CounterStatus, animation_tick: u8) -> Option<Line<'static>> {
    match status {
        CounterStatus::Idle => None,
        CounterStatus::Loading => {
            let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
            Some(Line::from(vec![
                Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
                Span::styled("Loading...", Style::default().fg(HEADER_TEXT)),
            ]))
        }
        CounterStatus::Succeeded => Some(Line::from(Span::styled(
            "Fetch succeeded",
            Style::default().fg(STATUS_OK),
        ))),
        CounterStatus::Failed => Some(Line::from(Span::styled(
            "Fetch failed",
            Style::default().fg(STATUS_ERROR),
        ))),
    }
}
