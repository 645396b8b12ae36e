//! Single-line input field rendering

use crate::state::InputField;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Field height in rows (borders + one line of text)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw an input field; the border turns red while `has_error` is set
pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    field: &InputField,
    is_active: bool,
    is_enabled: bool,
    has_error: bool,
    theme: &Theme,
) {
    let border_style = if has_error {
        Style::default().fg(theme.error)
    } else if is_active {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };

    let (display, is_placeholder) = field.display_value();
    let value_style = if is_placeholder || !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(theme.text)
    };

    // Keep the tail of long input visible
    let inner_width = area.width.saturating_sub(3) as usize;
    let char_count = display.chars().count();
    let visible: String = if char_count > inner_width {
        display.chars().skip(char_count - inner_width).collect()
    } else {
        display.to_string()
    };

    let cursor = Span::styled(
        if is_active && is_enabled { "▌" } else { "" },
        Style::default().fg(theme.accent),
    );
    let value = Span::styled(visible, value_style);
    let spans = if is_placeholder {
        vec![cursor, value]
    } else {
        vec![value, cursor]
    };
    let content = Paragraph::new(Line::from(spans));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}
