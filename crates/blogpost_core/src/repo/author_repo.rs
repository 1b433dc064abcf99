//! Author repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/read/list/update/soft-delete over `author`.
//!
//! # Invariants
//! - `fullname` is persisted verbatim; oversize input fails on the table
//!   CHECK constraint instead of being truncated.
//! - `updated_at` is strictly increasing per row.

use crate::db::NOW_MS_SQL;
use crate::model::author::{Author, AuthorId, CreateAuthor, UpdateAuthor};
use crate::model::lifecycle::Lifecycle;
use crate::model::query::ListQuery;
use crate::repo::error::{EntityKind, RepoError, RepoResult};
use crate::repo::{ensure_live, parse_uuid, sql_window};
use rusqlite::{params, Connection, OptionalExtension, Row};

const AUTHOR_SELECT_SQL: &str = "SELECT
    id,
    fullname,
    created_at,
    updated_at,
    deleted_at
FROM author";

/// Repository interface for author persistence.
pub trait AuthorRepository {
    /// Inserts a live author under a caller-generated id.
    fn add_author(&self, id: AuthorId, input: &CreateAuthor) -> RepoResult<()>;
    /// Returns the live author, or `NotFound` for missing/tombstoned ids.
    fn read_author_by_id(&self, id: AuthorId) -> RepoResult<Author>;
    /// Lists live authors whose fullname contains `query.search`.
    fn read_author_list(&self, query: &ListQuery) -> RepoResult<Vec<Author>>;
    fn update_author(&self, input: &UpdateAuthor) -> RepoResult<()>;
    /// Stamps the tombstone and returns its timestamp.
    fn delete_author(&self, id: AuthorId) -> RepoResult<i64>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn add_author(&self, id: AuthorId, input: &CreateAuthor) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO author (id, fullname) VALUES (?1, ?2);",
            params![id.to_string(), input.fullname.as_str()],
        )?;
        Ok(())
    }

    fn read_author_by_id(&self, id: AuthorId) -> RepoResult<Author> {
        let mut stmt = self.conn.prepare(&format!(
            "{AUTHOR_SELECT_SQL}
             WHERE id = ?1
               AND deleted_at IS NULL;"
        ))?;

        let mut rows = stmt.query([id.to_string()])?;
        let Some(row) = rows.next()? else {
            return Err(RepoError::not_found(EntityKind::Author, id));
        };

        let author = parse_author_row(row)?;
        ensure_live(author.lifecycle, "author", author.id)?;
        Ok(author)
    }

    fn read_author_list(&self, query: &ListQuery) -> RepoResult<Vec<Author>> {
        let mut stmt = self.conn.prepare(&format!(
            "{AUTHOR_SELECT_SQL}
             WHERE deleted_at IS NULL
               AND contains_ci(fullname, ?1)
             ORDER BY rowid
             LIMIT ?2 OFFSET ?3;"
        ))?;

        let mut rows = stmt.query(params![
            query.search.as_str(),
            sql_window(query.limit),
            sql_window(query.offset),
        ])?;

        let mut authors = Vec::new();
        while let Some(row) = rows.next()? {
            authors.push(parse_author_row(row)?);
        }
        Ok(authors)
    }

    fn update_author(&self, input: &UpdateAuthor) -> RepoResult<()> {
        let changed = self.conn.execute(
            &format!(
                "UPDATE author
                 SET
                    fullname = ?1,
                    updated_at = MAX({NOW_MS_SQL}, COALESCE(updated_at, created_at) + 1)
                 WHERE id = ?2
                   AND deleted_at IS NULL;"
            ),
            params![input.fullname.as_str(), input.id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::not_found(EntityKind::Author, input.id));
        }
        Ok(())
    }

    fn delete_author(&self, id: AuthorId) -> RepoResult<i64> {
        self.conn
            .query_row(
                &format!(
                    "UPDATE author
                     SET deleted_at = {NOW_MS_SQL}
                     WHERE id = ?1
                       AND deleted_at IS NULL
                     RETURNING deleted_at;"
                ),
                [id.to_string()],
                |row| row.get::<_, i64>(0),
            )
            .optional()?
            .ok_or_else(|| RepoError::not_found(EntityKind::Author, id))
    }
}

fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    Ok(Author {
        id: parse_uuid(row, "id")?,
        fullname: row.get("fullname")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        lifecycle: Lifecycle::from(row.get::<_, Option<i64>>("deleted_at")?),
    })
}
