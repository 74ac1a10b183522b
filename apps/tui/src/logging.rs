use color_eyre::Result;
use solar_zoning::config::LOG_FILE;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Headless output may log to stderr; the TUI only logs to a file, and only in debug.
pub fn init(debug: bool, interactive: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if interactive {
        if !debug {
            return Ok(());
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE)?;
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to initialize logging: {e}"))?;
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to initialize logging: {e}"))?;
    }

    Ok(())
}
