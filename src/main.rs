#![windows_subsystem = "windows"]

use anyhow::Result;
use transfer_view::{config::Config, gui, logging};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    logging::init();

    let config = Config::from_env()?;
    tracing::info!("Loading transfers from {}", config.endpoint);
    gui::launch(config)?;

    Ok(())
}
