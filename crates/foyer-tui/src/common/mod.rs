//! Shared UI helpers used across views.

pub mod form;
pub mod text;

pub use form::{InputHint, InputLine, centered_panel, render_hints, render_input_line};
pub use text::truncate_start_with_ellipsis;
