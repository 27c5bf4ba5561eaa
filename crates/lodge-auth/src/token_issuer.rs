use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Mints bearer credentials bound to a pseudonym and an issuance instant.
///
/// The signing secret is injected at construction; nothing here reads
/// process-wide state.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
}

impl TokenIssuer {
    /// Create an issuer signing with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
        }
    }

    /// Sign a token carrying the pseudonym as subject and `issued_at`
    /// (Unix seconds) as the issued-at claim.
    ///
    /// Fails only on key misconfiguration; for a well-formed pseudonym and
    /// a usable secret this always succeeds.
    #[track_caller]
    pub fn issue(&self, pseudonym: &str, issued_at: i64) -> AuthErrorResult<String> {
        let claims = Claims {
            sub: pseudonym.to_string(),
            iat: issued_at,
        };

        encode(&self.header, &claims, &self.encoding_key).map_err(|e| AuthError::Signing {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
