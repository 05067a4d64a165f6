//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use foyer_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "foyer")]
#[command(version = "1.0")]
#[command(about = "Terminal login portal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Check a credential pair without starting the portal
    Check {
        /// Username to check
        #[arg(value_name = "USERNAME")]
        username: String,

        /// Password to check
        #[arg(value_name = "PASSWORD")]
        password: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    // default to the interactive portal
    let Some(command) = cli.command else {
        return foyer_tui::run_portal(&config).await;
    };

    match command {
        Commands::Check { username, password } => {
            commands::check::run(&username, &password, &config).await
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
