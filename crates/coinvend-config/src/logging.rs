//! # Logging Bootstrap
//!
//! Installs the global tracing subscriber for the host process.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - wins over everything else
//! - `COINVEND_LOG=warn` - overrides the config file filter
//! - `[logging] filter` in machine.toml
//! - Default: `info,coinvend_core=debug`

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{ConfigError, ConfigResult};

/// Parses `EnvFilter` directives.
pub fn parse_filter(directives: &str) -> ConfigResult<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| ConfigError::Invalid(format!("log filter '{}': {}", directives, e)))
}

/// Initializes the tracing subscriber for structured logging.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> ConfigResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(&config.filter)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| ConfigError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert!(parse_filter(&LoggingConfig::default().filter).is_ok());
        assert!(parse_filter("warn").is_ok());
        assert!(parse_filter("info,coinvend_core::machine=trace").is_ok());
        assert!(matches!(
            parse_filter("coinvend_core=loud"),
            Err(ConfigError::Invalid(_))
        ));
    }
}
