use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Verifies presented lodge credentials.
///
/// Exactly one signing algorithm is accepted. A token whose header claims
/// any other scheme ("none", a different HMAC width, an asymmetric
/// algorithm) is rejected even when the rest of it is well formed, so the
/// header can never talk the verifier into a weaker check.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create validator accepting only HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Lodge credentials never expire; the subject claim is what matters.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate a JWT token and return its claims.
    ///
    /// Every decode failure (bad signature, unexpected algorithm, missing
    /// or wrong-typed subject) surfaces as a single `JwtDecode` category;
    /// callers must not hand out anything finer than that.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        // Additional claim validation
        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
