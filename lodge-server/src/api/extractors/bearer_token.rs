//! Axum extractor for the bearer-token authorization carrier

use crate::{ApiError, AppState};

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use error_location::ErrorLocation;

/// Extracts the raw bearer token from the `Authorization` header.
///
/// Absence of the header, a non-Bearer scheme, or an empty token all mean
/// no credential was presented; anything beyond that is the verifier's
/// business.
pub struct BearerToken(pub String);

impl FromRequestParts<AppState> for BearerToken {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = parts
                .headers
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "))
                .filter(|token| !token.is_empty());

            match token {
                Some(token) => Ok(BearerToken(token.to_string())),
                None => Err(ApiError::MissingCredential {
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}
