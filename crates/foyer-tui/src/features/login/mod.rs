//! Login view: form state, key handling, rendering.

pub mod render;
pub mod state;
pub mod update;

pub use render::render_login;
pub use state::{Field, LoginFormState};
pub use update::{LoginKeyResult, handle_key};
