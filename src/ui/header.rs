use crate::ui::counter::CounterStatus;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, source: &str, amount: u32, status: CounterStatus) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_color = match status {
            CounterStatus::Idle | CounterStatus::Succeeded => STATUS_OK,
            CounterStatus::Loading => STATUS_PENDING,
            CounterStatus::Failed => STATUS_ERROR,
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(status_color)),
            Span::styled("  ", text_style),
            Span::styled("tally", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(source.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("amount {}", amount), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status.as_str(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
