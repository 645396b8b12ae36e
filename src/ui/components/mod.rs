//! Reusable UI components

mod button;
mod field;

pub use button::{render_button, ButtonState, BUTTON_HEIGHT};
pub use field::{render_input, FIELD_HEIGHT};
