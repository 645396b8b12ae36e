//! Application state definitions

use super::reveal_state::RevealState;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Presentational variant of the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Dark, left-aligned column
    #[default]
    Minimal,
    /// Centered card with accent colors
    Spotlight,
}

impl Variant {
    pub fn next(&self) -> Self {
        match self {
            Self::Minimal => Self::Spotlight,
            Self::Spotlight => Self::Minimal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Spotlight => "spotlight",
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "spotlight" => Ok(Self::Spotlight),
            other => Err(format!("unknown variant '{other}'")),
        }
    }
}

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Input,
    Button,
}

impl FormFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Input => Self::Button,
            Self::Button => Self::Input,
        };
    }
}

/// UI state that is not part of the form itself
#[derive(Debug, Clone)]
pub struct AppState {
    pub variant: Variant,
    pub focus: FormFocus,
    pub brand: String,
    /// Page entry animation
    pub page_reveal: Option<RevealState>,
    /// Success panel animation, started when the form is submitted
    pub success_reveal: Option<RevealState>,
}

impl AppState {
    pub fn new(variant: Variant, brand: impl Into<String>) -> Self {
        Self {
            variant,
            focus: FormFocus::default(),
            brand: brand.into(),
            page_reveal: Some(RevealState::new()),
            success_reveal: None,
        }
    }

    /// Whether any reveal is still running
    pub fn is_animating(&self) -> bool {
        self.page_reveal.is_some() || self.success_reveal.is_some()
    }

    /// Advance running reveals, dropping the finished ones
    pub fn update_reveals(&mut self) {
        for slot in [&mut self.page_reveal, &mut self.success_reveal] {
            if let Some(reveal) = slot {
                reveal.update();
                if reveal.is_complete() {
                    *slot = None;
                }
            }
        }
    }

    pub fn page_offset(&self) -> u16 {
        self.page_reveal.as_ref().map_or(0, RevealState::row_offset)
    }

    pub fn success_offset(&self) -> u16 {
        self.success_reveal
            .as_ref()
            .map_or(0, RevealState::row_offset)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Variant::default(), "ACME")
    }
}
