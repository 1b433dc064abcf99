//! Blog use-case service.
//!
//! # Responsibility
//! - Expose the transport-facing contract for authors and articles.
//! - Validate input before any store access.
//! - Run every check + write + re-read sequence in one transaction.
//!
//! # Invariants
//! - Returned entities reflect the write that just completed.
//! - A failed operation leaves no row change behind.
//! - Delete returns the entity as it was just before the tombstone.

use crate::db::Database;
use crate::model::article::{Article, ArticleId, CreateArticle, PackedArticle, UpdateArticle};
use crate::model::author::{Author, AuthorId, CreateAuthor, UpdateAuthor};
use crate::model::query::ListQuery;
use crate::repo::article_repo::{ArticleRepository, SqliteArticleRepository};
use crate::repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
use crate::repo::error::{ErrorKind, RepoError, RepoResult};
use log::{debug, error, info};
use std::time::Instant;
use uuid::Uuid;

/// Capability interface shared by every transport adapter.
///
/// A contract change made here reaches REST and RPC alike.
pub trait BlogApi: Send + Sync {
    fn create_author(&self, input: &CreateAuthor) -> RepoResult<Author>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Author>;
    fn list_authors(&self, query: &ListQuery) -> RepoResult<Vec<Author>>;
    fn update_author(&self, input: &UpdateAuthor) -> RepoResult<Author>;
    fn delete_author(&self, id: AuthorId) -> RepoResult<Author>;

    fn create_article(&self, input: &CreateArticle) -> RepoResult<PackedArticle>;
    fn get_article(&self, id: ArticleId) -> RepoResult<PackedArticle>;
    fn list_articles(&self, query: &ListQuery) -> RepoResult<Vec<Article>>;
    fn update_article(&self, input: &UpdateArticle) -> RepoResult<PackedArticle>;
    fn delete_article(&self, id: ArticleId) -> RepoResult<PackedArticle>;
}

/// `BlogApi` backed by the SQLite gateway.
pub struct BlogService {
    db: Database,
}

impl BlogService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl BlogApi for BlogService {
    fn create_author(&self, input: &CreateAuthor) -> RepoResult<Author> {
        observe("author_create", || {
            input.validate()?;
            let id = Uuid::new_v4();
            self.db.with_transaction(|conn| {
                let authors = SqliteAuthorRepository::new(conn);
                authors.add_author(id, input)?;
                authors.read_author_by_id(id)
            })
        })
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Author> {
        observe("author_get", || {
            self.db
                .with_connection(|conn| SqliteAuthorRepository::new(conn).read_author_by_id(id))
        })
    }

    fn list_authors(&self, query: &ListQuery) -> RepoResult<Vec<Author>> {
        observe("author_list", || {
            self.db
                .with_connection(|conn| SqliteAuthorRepository::new(conn).read_author_list(query))
        })
    }

    fn update_author(&self, input: &UpdateAuthor) -> RepoResult<Author> {
        observe("author_update", || {
            input.validate()?;
            self.db.with_transaction(|conn| {
                let authors = SqliteAuthorRepository::new(conn);
                authors.update_author(input)?;
                authors.read_author_by_id(input.id)
            })
        })
    }

    fn delete_author(&self, id: AuthorId) -> RepoResult<Author> {
        observe("author_delete", || {
            self.db.with_transaction(|conn| {
                let authors = SqliteAuthorRepository::new(conn);
                let before = authors.read_author_by_id(id)?;
                let deleted_at = authors.delete_author(id)?;
                before
                    .lifecycle
                    .delete(deleted_at)
                    .map_err(|err| RepoError::InvalidData(format!("author {id}: {err}")))?;
                Ok(before)
            })
        })
    }

    fn create_article(&self, input: &CreateArticle) -> RepoResult<PackedArticle> {
        observe("article_create", || {
            input.validate()?;
            let id = Uuid::new_v4();
            self.db.with_transaction(|conn| {
                let articles = SqliteArticleRepository::new(conn);
                articles.add_article(id, input)?;
                articles.read_article_by_id(id)
            })
        })
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<PackedArticle> {
        observe("article_get", || {
            self.db
                .with_connection(|conn| SqliteArticleRepository::new(conn).read_article_by_id(id))
        })
    }

    fn list_articles(&self, query: &ListQuery) -> RepoResult<Vec<Article>> {
        observe("article_list", || {
            self.db.with_connection(|conn| {
                SqliteArticleRepository::new(conn).read_article_list(query)
            })
        })
    }

    fn update_article(&self, input: &UpdateArticle) -> RepoResult<PackedArticle> {
        observe("article_update", || {
            input.validate()?;
            self.db.with_transaction(|conn| {
                let articles = SqliteArticleRepository::new(conn);
                articles.update_article(input)?;
                articles.read_article_by_id(input.id)
            })
        })
    }

    fn delete_article(&self, id: ArticleId) -> RepoResult<PackedArticle> {
        observe("article_delete", || {
            self.db.with_transaction(|conn| {
                let articles = SqliteArticleRepository::new(conn);
                let before = articles.read_article_by_id(id)?;
                let deleted_at = articles.delete_article(id)?;
                before
                    .lifecycle
                    .delete(deleted_at)
                    .map_err(|err| RepoError::InvalidData(format!("article {id}: {err}")))?;
                Ok(before)
            })
        })
    }
}

/// Runs one service operation and emits its outcome event.
///
/// Payload text is never logged, only tier and message of failures.
fn observe<T>(event: &str, op: impl FnOnce() -> RepoResult<T>) -> RepoResult<T> {
    let started_at = Instant::now();
    let result = op();
    let duration_ms = started_at.elapsed().as_millis();

    match &result {
        Ok(_) => debug!("event={event} module=service status=ok duration_ms={duration_ms}"),
        Err(err) => match err.kind() {
            ErrorKind::Store => error!(
                "event={event} module=service status=error duration_ms={duration_ms} error_code=store error={err}"
            ),
            ErrorKind::NotFound => info!(
                "event={event} module=service status=rejected duration_ms={duration_ms} error_code=not_found error={err}"
            ),
            ErrorKind::Validation => info!(
                "event={event} module=service status=rejected duration_ms={duration_ms} error_code=validation"
            ),
        },
    }

    result
}
