//! One-shot credential check.
//!
//! Runs the same authenticator as the portal, including its configured
//! latency, and maps the verdict to the exit status.

use anyhow::Result;
use foyer_core::auth::{AuthResult, Authenticator, TableAuthenticator};
use foyer_core::config::Config;

pub async fn run(username: &str, password: &str, config: &Config) -> Result<()> {
    let authenticator = TableAuthenticator::reference().with_latency(config.auth_latency());

    match authenticator.authenticate(username, password).await {
        AuthResult::Success { identity } => {
            println!("OK: logged in as {identity}");
            Ok(())
        }
        AuthResult::Failure => anyhow::bail!("Username or password is incorrect"),
    }
}
