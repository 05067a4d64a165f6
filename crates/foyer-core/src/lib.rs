//! Core Foyer library (authentication contract, session state, quotes, config).

pub mod auth;
pub mod config;
pub mod quotes;
pub mod session;
