#![allow(dead_code)]

//! Test infrastructure for lodge-server API tests

use lodge_auth::{JwtValidator, TokenIssuer};
use lodge_club::Club;
use lodge_db::MasonRepository;
use lodge_server::AppState;

use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/lodge-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, returning the pool for direct inspection
pub async fn create_test_state() -> (AppState, SqlitePool) {
    let pool = create_test_pool().await;

    let club = Arc::new(Club::new(
        Arc::new(MasonRepository::new(pool.clone())),
        TokenIssuer::with_hs256(TEST_SECRET),
        JwtValidator::with_hs256(TEST_SECRET),
    ));

    (AppState { club }, pool)
}

/// Percent-encode a query parameter value byte by byte, so non-ASCII
/// pseudonyms fit into a request URI.
pub fn encode_query_value(value: &str) -> String {
    value.bytes().map(|b| format!("%{:02X}", b)).collect()
}
