use chrono::{DateTime, Utc};

/// An admitted member of the lodge.
///
/// `id` is assigned by the store at admission and never reused.
/// `last_seen_at` starts at the admission instant and only moves forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mason {
    pub id: i64,
    pub pseudonym: String,
    /// The bearer token issued at admission, kept for the record.
    /// Verification always re-validates a presented token instead of
    /// trusting this copy.
    pub token: String,
    pub last_seen_at: DateTime<Utc>,
}

/// A candidate identity that has passed validation and received its
/// credential, but has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewMason {
    pub pseudonym: String,
    pub token: String,
    pub last_seen_at: DateTime<Utc>,
}

impl NewMason {
    /// Finalize the record with the id the store assigned.
    pub fn into_mason(self, id: i64) -> Mason {
        Mason {
            id,
            pseudonym: self.pseudonym,
            token: self.token,
            last_seen_at: self.last_seen_at,
        }
    }
}
