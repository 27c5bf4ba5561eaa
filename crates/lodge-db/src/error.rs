use lodge_club::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        #[source]
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Mason '{pseudonym}' is already registered {location}")]
    AlreadyRegistered {
        pseudonym: String,
        location: ErrorLocation,
    },

    #[error("Mason '{pseudonym}' is not registered {location}")]
    MasonNotFound {
        pseudonym: String,
        location: ErrorLocation,
    },

    #[error("{rows} rows share the pseudonym '{pseudonym}' {location}")]
    DuplicatePseudonym {
        pseudonym: String,
        rows: u64,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Translate database failures into the store-boundary vocabulary the
/// workflow layer understands.
impl From<DbError> for StoreError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::AlreadyRegistered { pseudonym, .. } => {
                StoreError::AlreadyRegistered { pseudonym }
            }
            DbError::MasonNotFound { pseudonym, .. } => StoreError::NotFound { pseudonym },
            DbError::DuplicatePseudonym {
                pseudonym, rows, ..
            } => StoreError::Corrupted { pseudonym, rows },
            other => StoreError::Unavailable {
                message: other.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
