use serde::Serialize;

/// The roster listing, in admission order. An empty roster serializes as
/// an empty array, not an error.
#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub masons: Vec<String>,
}
