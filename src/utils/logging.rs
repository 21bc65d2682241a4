// Diagnostic logging setup

use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a maximum log level
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber, writing to stderr so prompts stay clean
pub fn init(verbosity: u8) -> Result<()> {
    let level = LevelFilter::from_level(level_for(verbosity));
    let filter = EnvFilter::default().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
