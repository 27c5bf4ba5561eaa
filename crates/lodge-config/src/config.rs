use crate::{AuthConfig, ConfigErrorResult, DatabaseConfig, LoggingConfig, ServerConfig};

use log::info;

/// Process configuration, assembled from environment variables (with an
/// optional `.env` file for development).
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> ConfigErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Log the effective configuration. The signing secret is never
    /// logged.
    pub fn log_summary(&self) {
        info!("Config: bind address {}", self.bind_addr());
        info!("Config: database path {}", self.database.path);
        info!(
            "Config: log level {:?}, colored {}",
            self.logging.level.0, self.logging.colored
        );
    }
}
