use crate::{ConfigError, ConfigErrorResult};

/// Credential signing configuration.
///
/// The secret is read exactly once at startup; a missing or empty value is
/// a startup-fatal configuration error, never a per-request one.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    pub fn from_env() -> ConfigErrorResult<Self> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| ConfigError::auth("JWT_SECRET must be set"))?;

        if jwt_secret.is_empty() {
            return Err(ConfigError::auth("JWT_SECRET must not be empty"));
        }

        Ok(Self { jwt_secret })
    }
}
