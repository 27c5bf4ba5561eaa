pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    error::{ApiError, Result as ApiResult},
    extractors::bearer_token::BearerToken,
    masons::{
        join_query::JoinQuery,
        join_response::JoinResponse,
        masons::{join, roster},
        roster_response::RosterResponse,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
