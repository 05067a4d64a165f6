//! Quotes panel: rotation key handling and rendering.
//!
//! The rotation cursor itself lives in `foyer_core::quotes`.

pub mod render;
pub mod update;

pub use render::render_quotes;
pub use update::handle_key;
