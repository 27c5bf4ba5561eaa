#![allow(dead_code)]

//! Test infrastructure for lodge-db integration tests

use lodge_core::NewMason;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A fixed, second-precision instant; `last_seen_at` is stored as Unix
/// seconds, so tests use timestamps that survive the round trip exactly.
pub fn test_instant(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).expect("valid test timestamp")
}

pub fn new_mason(pseudonym: &str, last_seen_at: DateTime<Utc>) -> NewMason {
    NewMason {
        pseudonym: pseudonym.to_string(),
        token: format!("token-for-{}", pseudonym),
        last_seen_at,
    }
}
