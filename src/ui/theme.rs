//! Colors and alignment for each page variant

use crate::state::Variant;
use ratatui::{layout::Alignment, style::Color};

/// Palette and placement for one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub error: Color,
    pub success: Color,
    /// Background of the button when enabled
    pub button_bg: Color,
    pub button_fg: Color,
    /// Text alignment inside the content column
    pub alignment: Alignment,
    /// Whether the content column is wrapped in a card
    pub card: bool,
}

impl Theme {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Minimal => Self {
                accent: Color::White,
                text: Color::White,
                muted: Color::Gray,
                border: Color::DarkGray,
                error: Color::Red,
                success: Color::Green,
                button_bg: Color::White,
                button_fg: Color::Black,
                alignment: Alignment::Left,
                card: false,
            },
            Variant::Spotlight => Self {
                accent: Color::Magenta,
                text: Color::White,
                muted: Color::Gray,
                border: Color::Magenta,
                error: Color::LightRed,
                success: Color::LightGreen,
                button_bg: Color::Magenta,
                button_fg: Color::White,
                alignment: Alignment::Center,
                card: true,
            },
        }
    }
}
