//! Article entity shapes.
//!
//! `Article` is the list projection and carries only `author_id`;
//! `PackedArticle` is the by-id projection with the author embedded.

use crate::model::author::{Author, AuthorId};
use crate::model::lifecycle::Lifecycle;
use crate::model::validation::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gateway-assigned article identifier. Never reused.
pub type ArticleId = Uuid;

/// Article payload. Both fields are required and non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub title: String,
    pub body: String,
}

impl Content {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.body.trim().is_empty() {
            return Err(ValidationError::EmptyBody);
        }
        Ok(())
    }
}

/// Article row as returned by list queries.
///
/// Serialized without `deleted_at`; the by-id shape carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub content: Content,
    pub author_id: AuthorId,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    /// Always live in a listing, so it is left off the wire.
    #[serde(rename = "deleted_at", default, skip_serializing)]
    pub lifecycle: Lifecycle,
}

/// Article joined with a snapshot of its author.
///
/// The author snapshot is returned even when that author is tombstoned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedArticle {
    pub id: ArticleId,
    pub content: Content,
    pub author: Author,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    #[serde(rename = "deleted_at")]
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateArticle {
    pub content: Content,
    pub author_id: AuthorId,
}

impl CreateArticle {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.content.validate()
    }
}

/// Author reassignment is not part of an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateArticle {
    pub id: ArticleId,
    pub content: Content,
}

impl UpdateArticle {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.content.validate()
    }
}
