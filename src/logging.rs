//! Logging module using tui-logger
//!
//! Log records are kept in memory and shown in the logs popup, since
//! anything written to stderr would tear the wheel drawing.

use color_eyre::Result;
use log::LevelFilter;

/// Initialize the tui-logger system
pub fn init_logging() -> Result<()> {
    tui_logger::init_logger(LevelFilter::Trace)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to init logger: {}", e))?;

    tui_logger::set_default_level(LevelFilter::Info);

    if std::env::var("RUST_LOG").is_ok() {
        tui_logger::set_env_filter_from_env(Some("RUST_LOG"));
    }

    log::info!("Fortune Wheel {} started", crate::VERSION);

    Ok(())
}
