use lodge_core::{Mason, NewMason};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failures at the store boundary, as the workflow sees them.
///
/// `AlreadyRegistered` and `NotFound` are expected, recoverable conditions.
/// `Corrupted` means the uniqueness invariant was violated inside the store
/// and is a server fault, never user error.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("mason '{pseudonym}' is already registered")]
    AlreadyRegistered { pseudonym: String },

    #[error("mason '{pseudonym}' is not registered")]
    NotFound { pseudonym: String },

    #[error("roster corrupted: {rows} records share the pseudonym '{pseudonym}'")]
    Corrupted { pseudonym: String, rows: u64 },

    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

/// The storage operations the admission and verification workflows need.
///
/// The workflows depend on this trait, never on a concrete database
/// handle, so the store can be substituted in tests.
#[async_trait]
pub trait MasonStore: Send + Sync {
    /// Persist a new mason and return the id the store assigned.
    ///
    /// Must be atomic with respect to the pseudonym uniqueness check:
    /// concurrent inserts of the same pseudonym leave exactly one record,
    /// and the loser gets `AlreadyRegistered`.
    async fn insert(&self, mason: &NewMason) -> Result<i64, StoreError>;

    /// Look up the single record for a pseudonym, if one exists.
    async fn find_by_pseudonym(&self, pseudonym: &str) -> Result<Option<Mason>, StoreError>;

    /// All admitted pseudonyms in insertion order. An empty roster is a
    /// valid, non-error result.
    async fn list_pseudonyms(&self) -> Result<Vec<String>, StoreError>;

    /// Move `last_seen_at` forward for a mason. Never moves it backward.
    async fn touch_last_seen(
        &self,
        pseudonym: &str,
        seen_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;
}
