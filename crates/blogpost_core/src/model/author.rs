//! Author entity shapes.

use crate::model::lifecycle::Lifecycle;
use crate::model::validation::{validate_fullname, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gateway-assigned author identifier. Never reused.
pub type AuthorId = Uuid;

/// Full author row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub fullname: String,
    /// Epoch milliseconds, set once by the store.
    pub created_at: i64,
    /// Absent until the first successful update.
    pub updated_at: Option<i64>,
    #[serde(rename = "deleted_at")]
    pub lifecycle: Lifecycle,
}

/// Caller-supplied fields for author creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAuthor {
    pub fullname: String,
}

impl CreateAuthor {
    pub fn new(fullname: impl Into<String>) -> Self {
        Self {
            fullname: fullname.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fullname(&self.fullname)
    }
}

/// Identifier plus mutable fields for author updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAuthor {
    pub id: AuthorId,
    pub fullname: String,
}

impl UpdateAuthor {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fullname(&self.fullname)
    }
}
