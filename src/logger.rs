//! Logging setup
//!
//! The library itself only talks to the `log` facade. Applications that want
//! to see those records can install a `fern` dispatcher from the
//! `[logging]` configuration section.

use crate::config::LoggingConfig;
use crate::constants::LOG_TIMESTAMP_FORMAT;
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;

/// Build (but do not install) a dispatcher for `config`
///
/// A disabled configuration yields a dispatcher that drops everything.
pub fn build_dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let level = if config.enabled {
        config
            .level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid log level: {}", config.level))?
    } else {
        LevelFilter::Off
    };

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    let dispatch = match &config.file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stderr()),
    };

    Ok(dispatch)
}

/// Install the global logger described by `config`
///
/// Fails if a global logger is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    build_dispatch(config)?
        .apply()
        .context("A global logger is already installed")?;
    Ok(())
}
