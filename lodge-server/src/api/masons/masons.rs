//! Mason REST API handlers
//!
//! Admission and the credential-protected roster listing.

use crate::{ApiError, ApiResult, AppState, BearerToken, JoinQuery, JoinResponse, RosterResponse};

use std::panic::Location;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::Utc;
use error_location::ErrorLocation;

/// GET /join?pseudonym=NAME
///
/// Admit a new mason and hand back the bearer credential
pub async fn join(
    State(state): State<AppState>,
    Query(query): Query<JoinQuery>,
) -> ApiResult<(StatusCode, Json<JoinResponse>)> {
    let pseudonym = query.pseudonym.ok_or_else(|| ApiError::BadRequest {
        message: "the 'pseudonym' query parameter is required".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let mason = state.club.admit(&pseudonym, Utc::now()).await?;

    Ok((
        StatusCode::CREATED,
        Json(JoinResponse {
            pseudonym: mason.pseudonym,
            bearer_token: mason.token,
        }),
    ))
}

/// GET /roster
///
/// List every admitted pseudonym; requires a valid bearer credential
pub async fn roster(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> ApiResult<Json<RosterResponse>> {
    state.club.authorize(&token, Utc::now()).await?;

    let masons = state.club.roster().await?;

    Ok(Json(RosterResponse { masons }))
}
