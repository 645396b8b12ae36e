//! Button component for TUI

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Visual state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Focused,
    Disabled,
}

/// Render a full-width button with border
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, state: ButtonState, theme: &Theme) {
    let border_style = match state {
        ButtonState::Focused => Style::default().fg(theme.accent),
        ButtonState::Normal | ButtonState::Disabled => Style::default().fg(theme.border),
    };

    let text_style = match state {
        ButtonState::Focused => Style::default()
            .fg(theme.button_fg)
            .bg(theme.button_bg)
            .add_modifier(Modifier::BOLD),
        ButtonState::Normal => Style::default().fg(theme.button_fg).bg(theme.button_bg),
        ButtonState::Disabled => Style::default().fg(Color::DarkGray),
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
