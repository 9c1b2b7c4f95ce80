//! Logger setup for the charmask binary.
//!
//! The level is decided once at startup from a [`LogConfig`] value and handed
//! to `env_logger`. The core library only emits through the `log` facade and
//! never sees this configuration.
//!
//! License: MIT OR APACHE 2.0

use env_logger::{Builder, Env};
use log::LevelFilter;

use crate::cli::Cli;

/// Explicit logging configuration for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Level used when `RUST_LOG` does not say otherwise.
    pub default_level: LevelFilter,
    /// When set, this level overrides whatever `RUST_LOG` requested globally.
    pub forced_level: Option<LevelFilter>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: LevelFilter::Info,
            forced_level: None,
        }
    }
}

impl LogConfig {
    /// Debug output for the whole run.
    pub fn verbose() -> Self {
        Self {
            forced_level: Some(LevelFilter::Debug),
            ..Self::default()
        }
    }
}

impl From<&Cli> for LogConfig {
    fn from(cli: &Cli) -> Self {
        if cli.verbose {
            LogConfig::verbose()
        } else {
            LogConfig::default()
        }
    }
}

fn builder_for(config: &LogConfig) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(config.default_level.as_str()));
    if let Some(level) = config.forced_level {
        builder.filter_level(level);
    }
    builder
}

/// Installs the global logger. Calling it again is a no-op.
pub fn init_logger(config: &LogConfig) {
    let _ = builder_for(config).try_init();
}
