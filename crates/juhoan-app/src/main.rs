use std::sync::Arc;

use clap::Parser;
use juhoan_core::FileStorage;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod controller;
pub mod events;
pub mod profile;
pub mod state;
pub mod status;
#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let (mut config, source) = profile::load_config(cli.config.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.display().to_string();
    }

    init_logging(config.log_json);
    match &source {
        Some(path) => tracing::info!("Loaded config from {}", path.display()),
        None => tracing::debug!("No config file, using defaults"),
    }

    let storage = Arc::new(FileStorage::new(&config.data_dir));
    let state = Arc::new(AppState::new(config, storage));
    let controller = AppController::from_config(state).await?;

    if let Err(e) = events::handle_command(&controller, cli.command).await {
        tracing::error!("{e:#}");
        return Err(e);
    }

    Ok(())
}

/// Logs go to stderr so translations on stdout stay pipeable
fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
