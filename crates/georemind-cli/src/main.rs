//! georemind CLI - location reminders from the terminal
//!
//! Drives the same view-models as a mobile front end, with console prompts
//! standing in for the platform permission and location-settings dialogs.

mod cli;
mod commands;
mod error;
mod platform;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::add::{run_add, AddArgs};
use crate::commands::clear::run_clear;
use crate::commands::common::{default_config_path, load_config, resolve_db_path};
use crate::commands::enter::run_enter;
use crate::commands::list::run_list;
use crate::commands::show::run_show;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("georemind=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config, default_config_path())?;
    let db_path = resolve_db_path(cli.db_path, &config, dirs::data_local_dir())?;

    match cli.command {
        Commands::Add {
            title,
            description,
            place,
            current,
            lat,
            lon,
            prompts,
            location_off,
        } => {
            let args = AddArgs {
                title,
                description,
                place,
                current,
                lat,
                lon,
                prompts,
                location_off,
            };
            run_add(args, &db_path, &config).await?;
        }
        Commands::List { json } => run_list(json, &db_path, &config).await?,
        Commands::Show { id, json } => run_show(&id, json, &db_path, &config).await?,
        Commands::Clear => run_clear(&db_path, &config).await?,
        Commands::Enter { ids } => run_enter(&ids, &db_path, &config).await?,
    }

    Ok(())
}
