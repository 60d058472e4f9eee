use std::env;
use std::fs::OpenOptions;

use anyhow::{Context, Result};

use crate::persistence::get_log_file_path;

/// Sets up `env_logger` when `RUST_LOG` is set.
///
/// The TUI owns the terminal, so records go to `sidemenu.log` in the config
/// directory instead of stderr.
pub fn init() -> Result<()> {
    if env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let path = get_log_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    log::debug!("logging to {}", path.display());
    Ok(())
}
