//! Page chrome (header, footer, status bar)

use super::theme::Theme;
use crate::app::App;
use crate::state::SubmissionStatus;
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Footer links (static, no behavior)
pub const FOOTER_LINKS: &[&str] = &["Twitter", "GitHub", "Contact"];

/// Areas of the page
pub struct PageLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

/// Split the screen into header, body, footer and status bar
pub fn create_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    PageLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
        status_bar: chunks[3],
    }
}

/// Draw the brand header
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let brand = Paragraph::new(Line::from(Span::styled(
        app.state.brand.as_str(),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Left);

    frame.render_widget(brand, area.inner(Margin::new(2, 1)));
}

/// Draw the footer: copyright on the left, links on the right
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let copyright = Paragraph::new(Span::styled(
        copyright_line(&app.state.brand, chrono::Local::now().year()),
        Style::default().fg(Color::DarkGray),
    ));

    let links: Vec<Span> = FOOTER_LINKS
        .iter()
        .flat_map(|link| {
            [
                Span::styled(*link, Style::default().fg(Color::DarkGray)),
                Span::raw("   "),
            ]
        })
        .collect();
    let links = Paragraph::new(Line::from(links)).alignment(Alignment::Right);

    let row = inner.inner(Margin::new(2, 0));
    frame.render_widget(copyright, row);
    frame.render_widget(links, row);
}

pub fn copyright_line(brand: &str, year: i32) -> String {
    format!("© {year} {brand}, Inc. All rights reserved.")
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.controller.status();

    let indicator = match status {
        SubmissionStatus::Idle => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
        SubmissionStatus::Submitting => Span::styled(" ◐ ", Style::default().fg(Color::Yellow)),
        SubmissionStatus::Submitted => Span::styled(" ● ", Style::default().fg(Color::Green)),
    };
    let hints = Span::styled(get_hints(status), Style::default().fg(Color::Gray));

    let bar = Paragraph::new(Line::from(vec![indicator, hints]))
        .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(bar, area);

    // Variant on the right
    let variant = format!(" {} ", app.state.variant.label());
    let variant_area = Rect {
        x: area.x + area.width.saturating_sub(variant.len() as u16),
        width: (variant.len() as u16).min(area.width),
        ..area
    };
    let variant_widget =
        Paragraph::new(variant).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(variant_widget, variant_area);
}

/// Keyboard hints for the current submission status
fn get_hints(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Idle => "Enter:submit  Tab:focus  ^U:clear  F2:variant  Esc:quit",
        SubmissionStatus::Submitting => "Submitting...  Esc:quit",
        SubmissionStatus::Submitted => "F2:variant  Esc:quit",
    }
}
