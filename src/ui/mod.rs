//! UI module for rendering the TUI

mod components;
mod layout;
mod page;
mod theme;

use crate::app::App;
use ratatui::Frame;
use theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = Theme::for_variant(app.state.variant);
    let layout = layout::create_layout(frame.area());

    layout::draw_header(frame, layout.header, app, &theme);
    page::draw(frame, layout.body, app, &theme);
    layout::draw_footer(frame, layout.footer, app);
    layout::draw_status_bar(frame, layout.status_bar, app);
}
