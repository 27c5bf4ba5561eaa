use serde::Serialize;

/// Successful admission response
#[derive(Debug, Serialize)]
pub struct JoinResponse {
    pub pseudonym: String,
    /// The freshly issued credential; required for protected endpoints
    pub bearer_token: String,
}
