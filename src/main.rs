//! Fortune Wheel - a spinning prize wheel for the terminal
//!
//! Spin the wheel, watch it slow down under the pointer, and claim
//! whatever prize it lands on.

mod app;
mod components;
mod config;
mod event;
mod logging;
mod theme;
mod tui;
mod ui;
mod wheel;

use app::App;
use color_eyre::Result;
use config::Config;

/// Application version - uses the release pipeline's version if available, otherwise Cargo.toml's
pub const VERSION: &str = match option_env!("APP_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Logs are buffered for the in-app viewer
    logging::init_logging()?;

    let config = Config::load();

    // Create and run the application
    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}
