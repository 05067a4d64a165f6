//! Feature modules for the portal views.
//!
//! Each view is self-contained: it owns its state (where it has any), its
//! key handler, and its render function. Business logic stays out; views
//! capture input and forward submissions upward through the reducer.

pub mod admin;
pub mod login;
pub mod quotes;
