//! Mason repository: the durable, uniquely-keyed roster.
//!
//! Uniqueness is enforced by the `UNIQUE` constraint on `masons.pseudonym`,
//! not by application-level checks, so two concurrent admissions of the
//! same pseudonym leave exactly one row and the loser sees a distinct
//! constraint failure.

use crate::{DbError, Result as DbErrorResult};

use lodge_club::{MasonStore, StoreError};
use lodge_core::{Mason, NewMason};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct MasonRepository {
    pool: SqlitePool,
}

impl MasonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Single conditional write; a unique-constraint violation maps to
    /// `AlreadyRegistered` instead of a generic failure.
    pub async fn insert(&self, mason: &NewMason) -> DbErrorResult<i64> {
        let last_seen_at = mason.last_seen_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO masons (pseudonym, token, last_seen_at)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(&mason.pseudonym)
        .bind(&mason.token)
        .bind(last_seen_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(DbError::AlreadyRegistered {
                    pseudonym: mason.pseudonym.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(source) => Err(DbError::from(source)),
        }
    }

    /// Exactly one row may match. More than one means the uniqueness
    /// invariant was violated in storage, which is surfaced as corruption
    /// rather than not-found.
    pub async fn find_by_pseudonym(&self, pseudonym: &str) -> DbErrorResult<Option<Mason>> {
        let rows = sqlx::query(
            r#"
                SELECT id, pseudonym, token, last_seen_at
                FROM masons
                WHERE pseudonym = ?
            "#,
        )
        .bind(pseudonym)
        .fetch_all(&self.pool)
        .await?;

        match rows.len() {
            0 => Ok(None),
            1 => Ok(Some(mason_from_row(&rows[0])?)),
            n => Err(DbError::DuplicatePseudonym {
                pseudonym: pseudonym.to_string(),
                rows: n as u64,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// All pseudonyms in admission order.
    pub async fn list_pseudonyms(&self) -> DbErrorResult<Vec<String>> {
        let rows = sqlx::query("SELECT pseudonym FROM masons ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row.try_get("pseudonym").map_err(DbError::from))
            .collect()
    }

    /// Move `last_seen_at` forward in a single statement. `MAX` keeps the
    /// column monotonic per mason without a read-then-write sequence.
    pub async fn touch_last_seen(
        &self,
        pseudonym: &str,
        seen_at: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        let seen_at = seen_at.timestamp();

        let result = sqlx::query(
            r#"
                UPDATE masons
                SET last_seen_at = MAX(last_seen_at, ?)
                WHERE pseudonym = ?
            "#,
        )
        .bind(seen_at)
        .bind(pseudonym)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::MasonNotFound {
                pseudonym: pseudonym.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

fn mason_from_row(row: &SqliteRow) -> DbErrorResult<Mason> {
    let last_seen_at: i64 = row.try_get("last_seen_at")?;

    Ok(Mason {
        id: row.try_get("id")?,
        pseudonym: row.try_get("pseudonym")?,
        token: row.try_get("token")?,
        last_seen_at: DateTime::from_timestamp(last_seen_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in masons.last_seen_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}

#[async_trait]
impl MasonStore for MasonRepository {
    async fn insert(&self, mason: &NewMason) -> std::result::Result<i64, StoreError> {
        Ok(MasonRepository::insert(self, mason).await?)
    }

    async fn find_by_pseudonym(
        &self,
        pseudonym: &str,
    ) -> std::result::Result<Option<Mason>, StoreError> {
        Ok(MasonRepository::find_by_pseudonym(self, pseudonym).await?)
    }

    async fn list_pseudonyms(&self) -> std::result::Result<Vec<String>, StoreError> {
        Ok(MasonRepository::list_pseudonyms(self).await?)
    }

    async fn touch_last_seen(
        &self,
        pseudonym: &str,
        seen_at: DateTime<Utc>,
    ) -> std::result::Result<(), StoreError> {
        Ok(MasonRepository::touch_last_seen(self, pseudonym, seen_at).await?)
    }
}
