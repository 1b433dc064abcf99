//! Persistence and consistency core for the blogpost service.
//! Transports depend on `BlogApi`; only this crate talks to the store.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{Database, DbError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{
    Article, ArticleId, Content, CreateArticle, PackedArticle, UpdateArticle,
};
pub use model::author::{Author, AuthorId, CreateAuthor, UpdateAuthor};
pub use model::lifecycle::{AlreadyDeleted, Lifecycle};
pub use model::query::{ListQuery, DEFAULT_LIST_LIMIT};
pub use model::validation::ValidationError;
pub use repo::article_repo::{ArticleRepository, SqliteArticleRepository};
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::error::{EntityKind, ErrorKind, RepoError, RepoResult};
pub use service::blog_service::{BlogApi, BlogService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
