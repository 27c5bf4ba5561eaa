//! REST API error types
//!
//! These errors produce consistent JSON responses with appropriate HTTP
//! status codes. Client-caused failures keep their detail; server-caused
//! failures are logged in full and cross the boundary as an opaque
//! `INTERNAL_ERROR`. Credential denials beyond a missing carrier collapse
//! into one generic code so callers cannot probe why a token was refused.

use lodge_club::ClubError;
use lodge_core::PseudonymViolation;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional per-rule detail
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "ALREADY_ADMITTED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// One entry per violated validation rule
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ApiErrorDetail>,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    pub rule: String,
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Pseudonym validation failed (400)
    #[error("Validation failed: {} rule(s) violated {location}", .violations.len())]
    Validation {
        violations: Vec<PseudonymViolation>,
        location: ErrorLocation,
    },

    /// Pseudonym already taken (409)
    #[error("Pseudonym '{pseudonym}' is already admitted {location}")]
    AlreadyAdmitted {
        pseudonym: String,
        location: ErrorLocation,
    },

    /// No bearer token in the authorization carrier (401)
    #[error("Missing credential {location}")]
    MissingCredential { location: ErrorLocation },

    /// Credential denied, reason withheld (401)
    #[error("Unauthorized {location}")]
    Unauthorized { location: ErrorLocation },

    /// Malformed request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error, detail logged server-side only (500)
    #[error("Internal error {location}")]
    Internal { location: ErrorLocation },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            other => log::warn!("{}", other),
        }

        let (status, body) = match self {
            ApiError::Validation { violations, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message: "pseudonym rejected".into(),
                    details: violations
                        .into_iter()
                        .map(|v| ApiErrorDetail {
                            rule: v.rule().into(),
                            message: v.to_string(),
                        })
                        .collect(),
                },
            ),
            ApiError::AlreadyAdmitted { pseudonym, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "ALREADY_ADMITTED".into(),
                    message: format!("the pseudonym '{}' is already taken", pseudonym),
                    details: Vec::new(),
                },
            ),
            ApiError::MissingCredential { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "MISSING_CREDENTIAL".into(),
                    message: "an authorization bearer token is required".into(),
                    details: Vec::new(),
                },
            ),
            ApiError::Unauthorized { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message: "credential rejected".into(),
                    details: Vec::new(),
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    details: Vec::new(),
                },
            ),
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message: "internal server error".into(),
                    details: Vec::new(),
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert workflow errors to API errors
impl From<ClubError> for ApiError {
    #[track_caller]
    fn from(e: ClubError) -> Self {
        match e {
            ClubError::Rejected { violations, .. } => ApiError::Validation {
                violations,
                location: ErrorLocation::from(Location::caller()),
            },
            ClubError::AlreadyAdmitted { pseudonym, .. } => ApiError::AlreadyAdmitted {
                pseudonym,
                location: ErrorLocation::from(Location::caller()),
            },
            denial @ (ClubError::InvalidCredential { .. } | ClubError::UnknownSubject { .. }) => {
                // Distinguishable in the log, one generic code on the wire
                log::warn!("access denied: {}", denial);
                ApiError::Unauthorized {
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            fault @ (ClubError::Signing { .. } | ClubError::Store { .. }) => {
                log::error!("internal failure: {}", fault);
                ApiError::Internal {
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
