//! Fetch the transfer list once and print it as an HTML page on stdout.

use anyhow::Result;
use transfer_view::{config::Config, logging, render, TransferView};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    logging::init();

    let config = Config::from_env()?;
    let container = render::Container::from_selector(&config.container_selector)?;
    let mut view = TransferView::with_config(config.clone())?;

    view.on_mount();
    // Allow the client timeout plus a little slack for runtime startup
    if !view.wait(config.request_timeout + std::time::Duration::from_secs(1)) {
        tracing::warn!("Timed out waiting for {}", config.endpoint);
        view.teardown();
    }

    print!("{}", render::render_page(&container, &view.render()));
    Ok(())
}
