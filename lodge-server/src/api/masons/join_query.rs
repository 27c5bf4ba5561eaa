use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct JoinQuery {
    /// Desired pseudonym (required)
    #[serde(default)]
    pub pseudonym: Option<String>,
}
