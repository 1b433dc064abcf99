//! List/search options shared by author and article listing.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIST_LIMIT: u64 = 10;

/// Window and filter for list operations.
///
/// `search` is an unanchored, case-insensitive substring; empty matches all.
/// No upper bound is applied to `limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub offset: u64,
    pub limit: u64,
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIST_LIMIT,
            search: String::new(),
        }
    }
}

impl ListQuery {
    pub fn page(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit,
            search: String::new(),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}
