//! Soft-delete tombstone state machine.
//!
//! # Invariants
//! - `Live -> Deleted` is the only transition.
//! - A deleted value can neither be revived nor deleted again.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Liveness of a persisted row.
///
/// Serialized as the nullable `deleted_at` column/field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum Lifecycle {
    #[default]
    Live,
    /// Tombstoned at the given epoch milliseconds.
    Deleted { deleted_at: i64 },
}

/// Returned when deleting a row that already carries a tombstone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyDeleted {
    pub deleted_at: i64,
}

impl Display for AlreadyDeleted {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "row already deleted at {}", self.deleted_at)
    }
}

impl Error for AlreadyDeleted {}

impl Lifecycle {
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }

    pub fn deleted_at(&self) -> Option<i64> {
        match self {
            Self::Live => None,
            Self::Deleted { deleted_at } => Some(*deleted_at),
        }
    }

    /// Stamps the tombstone.
    ///
    /// # Errors
    /// - `AlreadyDeleted` when the value is not live.
    pub fn delete(self, at: i64) -> Result<Self, AlreadyDeleted> {
        match self {
            Self::Live => Ok(Self::Deleted { deleted_at: at }),
            Self::Deleted { deleted_at } => Err(AlreadyDeleted { deleted_at }),
        }
    }
}

impl From<Option<i64>> for Lifecycle {
    fn from(value: Option<i64>) -> Self {
        match value {
            None => Self::Live,
            Some(deleted_at) => Self::Deleted { deleted_at },
        }
    }
}

impl From<Lifecycle> for Option<i64> {
    fn from(value: Lifecycle) -> Self {
        value.deleted_at()
    }
}
