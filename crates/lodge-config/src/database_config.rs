use crate::DEFAULT_DATABASE_PATH;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());

        Self { path }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
        }
    }
}
