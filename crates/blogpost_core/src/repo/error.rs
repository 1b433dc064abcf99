//! Repository error taxonomy.

use crate::db::DbError;
use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Entity named by a `NotFound` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Author,
    Article,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Article => "article",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Externally observable failure tier.
///
/// Transports map these three tiers to their native status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Store,
}

/// Error returned by repositories and services.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    /// Row is missing or tombstoned; the two are deliberately merged.
    ///
    /// An article created against a dead author reports `entity = Author`.
    NotFound { entity: EntityKind, id: Uuid },
    InvalidData(String),
}

impl RepoError {
    pub fn not_found(entity: EntityKind, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Db(_) | Self::InvalidData(_) => ErrorKind::Store,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityKind, ErrorKind, RepoError};
    use crate::model::validation::ValidationError;
    use uuid::Uuid;

    #[test]
    fn errors_fall_into_three_tiers() {
        let id = Uuid::new_v4();
        assert_eq!(
            RepoError::not_found(EntityKind::Author, id).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            RepoError::from(ValidationError::EmptyBody).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            RepoError::InvalidData("bad".to_string()).kind(),
            ErrorKind::Store
        );
        assert_eq!(
            RepoError::from(rusqlite::Error::QueryReturnedNoRows).kind(),
            ErrorKind::Store
        );
    }

    #[test]
    fn not_found_message_names_the_entity() {
        let id = Uuid::nil();
        let message = RepoError::not_found(EntityKind::Author, id).to_string();
        assert_eq!(message, format!("author not found: {id}"));
    }
}
