use crate::StoreError;

use lodge_auth::AuthError;
use lodge_core::PseudonymViolation;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClubError {
    /// Admission rejected: the pseudonym violated one or more rules.
    #[error("pseudonym rejected ({} rule(s) violated) {location}", .violations.len())]
    Rejected {
        violations: Vec<PseudonymViolation>,
        location: ErrorLocation,
    },

    /// Admission rejected: the pseudonym is already taken.
    #[error("mason '{pseudonym}' is already initiated {location}")]
    AlreadyAdmitted {
        pseudonym: String,
        location: ErrorLocation,
    },

    /// Verification denied: the presented credential did not check out.
    /// Deliberately carries no detail about why.
    #[error("credential rejected {location}")]
    InvalidCredential { location: ErrorLocation },

    /// Verification denied: a well-signed credential for a mason that does
    /// not exist in the roster.
    #[error("no mason answers to '{pseudonym}' {location}")]
    UnknownSubject {
        pseudonym: String,
        location: ErrorLocation,
    },

    /// Credential could not be minted; secret misconfiguration.
    #[error("credential issuance failed: {source} {location}")]
    Signing {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    /// The store failed or reported corruption.
    #[error("store failure: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl From<StoreError> for ClubError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for ClubError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Signing {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClubError>;
