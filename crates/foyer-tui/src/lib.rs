//! Full-screen TUI implementation for Foyer.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod router;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};
use std::sync::Arc;

use anyhow::Result;
pub use features::{admin, login, quotes};
use foyer_core::auth::{Authenticator, TableAuthenticator};
use foyer_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive login portal until the user quits.
pub async fn run_portal(config: &Config) -> Result<()> {
    // The portal requires a terminal to render the TUI.
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The portal requires a terminal.\n\
             Use `foyer check <username> <password>` for non-interactive checks."
        );
    }

    let authenticator: Arc<dyn Authenticator> =
        Arc::new(TableAuthenticator::reference().with_latency(config.auth_latency()));

    let mut runtime = TuiRuntime::new(config.clone(), authenticator)?;
    runtime.run()
}
