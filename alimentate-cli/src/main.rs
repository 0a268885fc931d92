//! Alimentate CLI
//!
//! Drives the session lifecycle from a terminal. Durable session storage and
//! config live in `ALIMENTATE_DATA_DIR` (default `~/.alimentate`).

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod commands;
mod config_commands;

use app::App;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("setting default subscriber failed")?;

    match cli.command {
        Commands::Config(cmd) => commands::handle_config_command(cmd),
        Commands::SignIn { username, password } => {
            commands::handle_sign_in(&App::bootstrap()?, username, password).await
        }
        Commands::SignUp { username, password, roles } => {
            commands::handle_sign_up(&App::bootstrap()?, username, password, roles).await
        }
        Commands::SignOut => commands::handle_sign_out(&App::bootstrap()?),
        Commands::Status { json } => commands::handle_status(&App::bootstrap()?, json),
        Commands::Validate => commands::handle_validate(&App::bootstrap()?),
        Commands::Restore => commands::handle_restore(&App::bootstrap()?),
        Commands::Get { path } => commands::handle_get(&App::bootstrap()?, &path).await,
    }
}
