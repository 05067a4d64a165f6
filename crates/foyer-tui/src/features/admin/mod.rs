//! Admin panel view. Render-only; it carries no state of its own.

pub mod render;

pub use render::render_admin;
