//! Article repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/read/list/update/soft-delete over `article`.
//! - Enforce the live-author reference at creation time.
//!
//! # Invariants
//! - `add_article` checks the author before inserting; a dead or missing
//!   author means no row is written.
//! - `author_id` is immutable after creation.
//! - By-id reads embed the author regardless of the author's own tombstone.

use crate::db::NOW_MS_SQL;
use crate::model::article::{
    Article, ArticleId, Content, CreateArticle, PackedArticle, UpdateArticle,
};
use crate::model::author::Author;
use crate::model::lifecycle::Lifecycle;
use crate::model::query::ListQuery;
use crate::repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
use crate::repo::error::{EntityKind, RepoError, RepoResult};
use crate::repo::{ensure_live, parse_uuid, sql_window};
use rusqlite::{params, Connection, OptionalExtension, Row};

const ARTICLE_SELECT_SQL: &str = "SELECT
    id,
    title,
    body,
    author_id,
    created_at,
    updated_at,
    deleted_at
FROM article";

const PACKED_ARTICLE_SELECT_SQL: &str = "SELECT
    ar.id AS id,
    ar.title AS title,
    ar.body AS body,
    ar.created_at AS created_at,
    ar.updated_at AS updated_at,
    ar.deleted_at AS deleted_at,
    au.id AS author_id,
    au.fullname AS author_fullname,
    au.created_at AS author_created_at,
    au.updated_at AS author_updated_at,
    au.deleted_at AS author_deleted_at
FROM article ar
JOIN author au ON au.id = ar.author_id";

/// Repository interface for article persistence.
pub trait ArticleRepository {
    /// Inserts a live article after resolving its author.
    ///
    /// # Errors
    /// - `NotFound { entity: Author, .. }` when the author is missing or
    ///   tombstoned.
    fn add_article(&self, id: ArticleId, input: &CreateArticle) -> RepoResult<()>;
    /// Returns the live article joined with its author.
    fn read_article_by_id(&self, id: ArticleId) -> RepoResult<PackedArticle>;
    /// Lists live articles whose title or body contains `query.search`.
    fn read_article_list(&self, query: &ListQuery) -> RepoResult<Vec<Article>>;
    fn update_article(&self, input: &UpdateArticle) -> RepoResult<()>;
    /// Stamps the tombstone and returns its timestamp.
    fn delete_article(&self, id: ArticleId) -> RepoResult<i64>;
}

/// SQLite-backed article repository.
pub struct SqliteArticleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn add_article(&self, id: ArticleId, input: &CreateArticle) -> RepoResult<()> {
        SqliteAuthorRepository::new(self.conn).read_author_by_id(input.author_id)?;

        self.conn.execute(
            "INSERT INTO article (id, title, body, author_id) VALUES (?1, ?2, ?3, ?4);",
            params![
                id.to_string(),
                input.content.title.as_str(),
                input.content.body.as_str(),
                input.author_id.to_string(),
            ],
        )?;
        Ok(())
    }

    fn read_article_by_id(&self, id: ArticleId) -> RepoResult<PackedArticle> {
        let mut stmt = self.conn.prepare(&format!(
            "{PACKED_ARTICLE_SELECT_SQL}
             WHERE ar.id = ?1
               AND ar.deleted_at IS NULL;"
        ))?;

        let mut rows = stmt.query([id.to_string()])?;
        let Some(row) = rows.next()? else {
            return Err(RepoError::not_found(EntityKind::Article, id));
        };

        let article = parse_packed_article_row(row)?;
        ensure_live(article.lifecycle, "article", article.id)?;
        Ok(article)
    }

    fn read_article_list(&self, query: &ListQuery) -> RepoResult<Vec<Article>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ARTICLE_SELECT_SQL}
             WHERE deleted_at IS NULL
               AND (contains_ci(title, ?1) OR contains_ci(body, ?1))
             ORDER BY rowid
             LIMIT ?2 OFFSET ?3;"
        ))?;

        let mut rows = stmt.query(params![
            query.search.as_str(),
            sql_window(query.limit),
            sql_window(query.offset),
        ])?;

        let mut articles = Vec::new();
        while let Some(row) = rows.next()? {
            articles.push(parse_article_row(row)?);
        }
        Ok(articles)
    }

    fn update_article(&self, input: &UpdateArticle) -> RepoResult<()> {
        let changed = self.conn.execute(
            &format!(
                "UPDATE article
                 SET
                    title = ?1,
                    body = ?2,
                    updated_at = MAX({NOW_MS_SQL}, COALESCE(updated_at, created_at) + 1)
                 WHERE id = ?3
                   AND deleted_at IS NULL;"
            ),
            params![
                input.content.title.as_str(),
                input.content.body.as_str(),
                input.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::not_found(EntityKind::Article, input.id));
        }
        Ok(())
    }

    fn delete_article(&self, id: ArticleId) -> RepoResult<i64> {
        self.conn
            .query_row(
                &format!(
                    "UPDATE article
                     SET deleted_at = {NOW_MS_SQL}
                     WHERE id = ?1
                       AND deleted_at IS NULL
                     RETURNING deleted_at;"
                ),
                [id.to_string()],
                |row| row.get::<_, i64>(0),
            )
            .optional()?
            .ok_or_else(|| RepoError::not_found(EntityKind::Article, id))
    }
}

fn parse_article_row(row: &Row<'_>) -> RepoResult<Article> {
    Ok(Article {
        id: parse_uuid(row, "id")?,
        content: Content {
            title: row.get("title")?,
            body: row.get("body")?,
        },
        author_id: parse_uuid(row, "author_id")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        lifecycle: Lifecycle::from(row.get::<_, Option<i64>>("deleted_at")?),
    })
}

fn parse_packed_article_row(row: &Row<'_>) -> RepoResult<PackedArticle> {
    let author = Author {
        id: parse_uuid(row, "author_id")?,
        fullname: row.get("author_fullname")?,
        created_at: row.get("author_created_at")?,
        updated_at: row.get("author_updated_at")?,
        lifecycle: Lifecycle::from(row.get::<_, Option<i64>>("author_deleted_at")?),
    };

    Ok(PackedArticle {
        id: parse_uuid(row, "id")?,
        content: Content {
            title: row.get("title")?,
            body: row.get("body")?,
        },
        author,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        lifecycle: Lifecycle::from(row.get::<_, Option<i64>>("deleted_at")?),
    })
}
