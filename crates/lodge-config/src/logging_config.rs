use crate::{DEFAULT_LOG_COLORED, DEFAULT_LOG_LEVEL_STRING};
use crate::{ConfigError, ConfigErrorResult, LogLevel};

use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub colored: bool,
    /// Log to this file instead of stdout when set
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn from_env() -> ConfigErrorResult<Self> {
        let level = std::env::var("LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL_STRING.to_string());
        // FromStr never fails, unknown names fall back to Info
        let level = LogLevel::from_str(&level).unwrap();

        let colored = match std::env::var("LOG_COLORED") {
            Ok(raw) => raw.parse().map_err(|_| {
                ConfigError::logging(format!("invalid LOG_COLORED value '{}'", raw))
            })?,
            Err(_) => DEFAULT_LOG_COLORED,
        };

        let file = std::env::var("LOG_FILE").ok().map(PathBuf::from);

        Ok(Self {
            level,
            colored,
            file,
        })
    }
}
