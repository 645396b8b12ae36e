//! Landing page body: hero copy, the waitlist form or success panel, legal line

use super::components::{render_button, render_input, ButtonState, BUTTON_HEIGHT, FIELD_HEIGHT};
use super::theme::Theme;
use crate::app::App;
use crate::state::{FormFocus, SubmissionStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const HEADLINE: &str = "Join the waitlist";
pub const SUBHEADLINE: &str = "Be the first to experience our platform when we launch.";
pub const BUTTON_LABEL: &str = "Join Waitlist";
pub const SUCCESS_TITLE: &str = "You're on the list";
pub const SUCCESS_BODY: &str = "Thanks for joining our waitlist. We'll notify you when we launch.";

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Maximum width of the content column
const COLUMN_WIDTH: u16 = 52;
/// Rows used by the hero (headline, gap, two lines of subheadline, gap)
const HERO_HEIGHT: u16 = 5;
/// Field + error line + button
const FORM_HEIGHT: u16 = FIELD_HEIGHT + 1 + BUTTON_HEIGHT;
const SUCCESS_HEIGHT: u16 = 6;
/// Gap + two lines of legal copy
const LEGAL_HEIGHT: u16 = 3;

/// Draw the page body centered in `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let status = app.controller.status();
    let middle_height = if status == SubmissionStatus::Submitted {
        SUCCESS_HEIGHT
    } else {
        FORM_HEIGHT
    };
    let card_padding = if theme.card { 2 } else { 0 };
    let content_height = HERO_HEIGHT + middle_height + LEGAL_HEIGHT + card_padding;

    let column = centered_column(area, content_height, app.state.page_offset());

    let inner = if theme.card {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));
        let inner = block.inner(column);
        frame.render_widget(block, column);
        inner.inner(Margin::new(1, 0))
    } else {
        column
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HERO_HEIGHT),
            Constraint::Length(middle_height),
            Constraint::Length(LEGAL_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);

    draw_hero(frame, chunks[0], theme);
    if status == SubmissionStatus::Submitted {
        draw_success(frame, chunks[1], app, theme);
    } else {
        draw_form(frame, chunks[1], app, theme);
    }
    draw_legal(frame, chunks[2], theme);
}

/// Column of at most `COLUMN_WIDTH` x `height`, centered, shifted down by `offset`
fn centered_column(area: Rect, height: u16, offset: u16) -> Rect {
    let width = COLUMN_WIDTH.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let top = (area.height - height) / 2;
    let y = area.y + (top + offset).min(area.height - height);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn draw_hero(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            HEADLINE,
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(SUBHEADLINE, Style::default().fg(theme.muted))),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(theme.alignment)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let snapshot = app.controller.snapshot();
    let submitting = snapshot.status == SubmissionStatus::Submitting;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .split(area);

    render_input(
        frame,
        chunks[0],
        &app.controller.form().email,
        app.state.focus == FormFocus::Input,
        !submitting,
        snapshot.error_message.is_some(),
        theme,
    );

    if let Some(message) = &snapshot.error_message {
        let error = Paragraph::new(Span::styled(
            message.as_str(),
            Style::default().fg(theme.error),
        ))
        .alignment(theme.alignment);
        frame.render_widget(error, chunks[1]);
    }

    let (label, state) = if submitting {
        let frame_idx = app.spinner_frame(SPINNER_FRAMES.len());
        (SPINNER_FRAMES[frame_idx].to_string(), ButtonState::Disabled)
    } else if app.state.focus == FormFocus::Button {
        (BUTTON_LABEL.to_string(), ButtonState::Focused)
    } else {
        (BUTTON_LABEL.to_string(), ButtonState::Normal)
    };
    render_button(frame, chunks[2], &label, state, theme);
}

fn draw_success(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let offset = app.state.success_offset();
    let panel = Rect {
        y: area.y + offset.min(area.height),
        height: area.height.saturating_sub(offset),
        ..area
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("✔ ", Style::default().fg(theme.success)),
            Span::styled(
                SUCCESS_TITLE,
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(SUCCESS_BODY, Style::default().fg(theme.muted))),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(theme.alignment)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(paragraph, panel);
}

fn draw_legal(frame: &mut Frame, area: Rect, theme: &Theme) {
    let link = Style::default()
        .fg(theme.muted)
        .add_modifier(Modifier::UNDERLINED);
    let plain = Style::default().fg(Color::DarkGray);

    let line = Line::from(vec![
        Span::styled("By joining, you agree to our ", plain),
        Span::styled("Terms of Service", link),
        Span::styled(" and ", plain),
        Span::styled("Privacy Policy", link),
        Span::styled(".", plain),
    ]);

    let paragraph = Paragraph::new(vec![Line::from(""), line])
        .alignment(theme.alignment)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
