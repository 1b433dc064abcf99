//! Persistence gateway: repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Own every SQL statement touching `author` and `article`.
//! - Translate "zero live rows matched" into semantic `NotFound` errors.
//!
//! # Invariants
//! - Identifier and timestamp columns are written only here.
//! - Reads, updates and deletes only ever match live rows; a missing row and
//!   a tombstoned row produce the same `NotFound`.
//! - Store errors are surfaced unchanged, never retried.

pub mod article_repo;
pub mod author_repo;
pub mod error;

use crate::model::lifecycle::Lifecycle;
use error::{RepoError, RepoResult};
use rusqlite::Row;
use uuid::Uuid;

pub(crate) fn parse_uuid(row: &Row<'_>, column: &str) -> RepoResult<Uuid> {
    let text: String = row.get(column)?;
    Uuid::parse_str(&text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{text}` in {column}")))
}

/// Rejects a row that a liveness-filtered query should never have returned.
pub(crate) fn ensure_live(lifecycle: Lifecycle, what: &str, id: Uuid) -> RepoResult<()> {
    if lifecycle.is_live() {
        return Ok(());
    }
    Err(RepoError::InvalidData(format!(
        "{what} {id} returned as live but carries a tombstone"
    )))
}

/// Binds a list window value; SQLite integers stop at `i64::MAX`, which is
/// already past any table size.
pub(crate) fn sql_window(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
