//! Database initialization, row models and store operations

pub mod artists;
pub mod init;
pub mod models;
pub mod shows;
pub mod venues;

#[cfg(test)]
pub(crate) mod fixtures;

pub use init::*;
pub use models::*;

use crate::{Error, Result};
use sqlx::{Sqlite, Transaction};
use tracing::warn;

/// Case-insensitive substring match on a name; an empty term matches all.
///
/// Case folding is Unicode-aware and `%` / `_` are literal characters.
pub(crate) fn name_matches(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

/// Begin a write transaction
pub(crate) async fn begin(pool: &sqlx::SqlitePool) -> Result<Transaction<'static, Sqlite>> {
    pool.begin().await.map_err(Error::from_write)
}

/// Commit on success, roll back on failure.
///
/// The rollback completes before the original error is returned, and the
/// connection goes back to the pool on both paths.
pub(crate) async fn finish<T>(tx: Transaction<'_, Sqlite>, outcome: Result<T>) -> Result<T> {
    match outcome {
        Ok(value) => {
            tx.commit().await.map_err(Error::from_write)?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback failed after {}: {}", e, rollback_err);
            }
            Err(e)
        }
    }
}
