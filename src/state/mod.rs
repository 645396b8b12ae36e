//! Application state module

mod app_state;
mod field;
mod form_state;
mod reveal_state;

pub use app_state::*;
pub use field::*;
pub use form_state::*;
pub use reveal_state::*;
