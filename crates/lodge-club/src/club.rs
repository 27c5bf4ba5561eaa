use crate::{ClubError, MasonStore, Result as ClubErrorResult, StoreError};

use lodge_auth::{JwtValidator, TokenIssuer};
use lodge_core::{Mason, NewMason, validate_pseudonym};

use std::panic::Location;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{debug, warn};

/// The membership workflows: admission, credential verification, and the
/// roster listing.
///
/// All collaborators are injected at construction. The store is abstract,
/// the issuer and validator each carry their own copy of the signing
/// secret; nothing is read from ambient state after startup.
pub struct Club {
    store: Arc<dyn MasonStore>,
    issuer: TokenIssuer,
    validator: JwtValidator,
}

impl Club {
    pub fn new(store: Arc<dyn MasonStore>, issuer: TokenIssuer, validator: JwtValidator) -> Self {
        Self {
            store,
            issuer,
            validator,
        }
    }

    /// Admit a new mason under `pseudonym`.
    ///
    /// Validates the pseudonym, mints its credential, then persists the
    /// record. The insert comes last, so an admission that fails or is
    /// aborted partway never leaves a persisted identity whose credential
    /// was not handed back.
    pub async fn admit(&self, pseudonym: &str, joined_at: DateTime<Utc>) -> ClubErrorResult<Mason> {
        let violations = validate_pseudonym(pseudonym);
        if !violations.is_empty() {
            return Err(ClubError::Rejected {
                violations,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token = self.issuer.issue(pseudonym, joined_at.timestamp())?;

        let candidate = NewMason {
            pseudonym: pseudonym.to_string(),
            token,
            last_seen_at: joined_at,
        };

        let id = match self.store.insert(&candidate).await {
            Ok(id) => id,
            Err(StoreError::AlreadyRegistered { pseudonym }) => {
                return Err(ClubError::AlreadyAdmitted {
                    pseudonym,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(source) => return Err(ClubError::from(source)),
        };

        Ok(candidate.into_mason(id))
    }

    /// Verify a presented bearer token and return the mason it belongs to.
    ///
    /// Signature and claim checks collapse into a single
    /// `InvalidCredential`; the concrete decode failure is only logged.
    /// A well-signed token whose subject has no roster record is denied as
    /// `UnknownSubject`. The freshness refresh is best-effort: failing to
    /// record `last_seen_at` does not deny an otherwise authorized request.
    pub async fn authorize(&self, token: &str, seen_at: DateTime<Utc>) -> ClubErrorResult<Mason> {
        let claims = match self.validator.validate(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!("credential rejected: {}", e);
                return Err(ClubError::InvalidCredential {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let mut mason = match self.store.find_by_pseudonym(&claims.sub).await? {
            Some(mason) => mason,
            None => {
                return Err(ClubError::UnknownSubject {
                    pseudonym: claims.sub,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        match self.store.touch_last_seen(&mason.pseudonym, seen_at).await {
            Ok(()) => mason.last_seen_at = mason.last_seen_at.max(seen_at),
            Err(e) => warn!(
                "failed to refresh last_seen_at for '{}': {}",
                mason.pseudonym, e
            ),
        }

        Ok(mason)
    }

    /// All admitted pseudonyms in admission order. An empty roster is a
    /// successful empty listing.
    pub async fn roster(&self) -> ClubErrorResult<Vec<String>> {
        Ok(self.store.list_pseudonyms().await?)
    }
}
