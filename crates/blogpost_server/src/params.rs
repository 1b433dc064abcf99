//! Request parameter shapes shared by REST and RPC.

use crate::error::ApiError;
use blogpost_core::{ListQuery, DEFAULT_LIST_LIMIT};
use serde::Deserialize;
use uuid::Uuid;

/// Raw list window as sent by callers; signed so negatives can be reported.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

impl ListParams {
    pub fn into_query(self) -> Result<ListQuery, ApiError> {
        Ok(ListQuery {
            offset: non_negative("offset", self.offset.unwrap_or(0))?,
            limit: match self.limit {
                Some(limit) => non_negative("limit", limit)?,
                None => DEFAULT_LIST_LIMIT,
            },
            search: self.search.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdParams {
    pub id: Uuid,
}

fn non_negative(name: &str, value: i64) -> Result<u64, ApiError> {
    u64::try_from(value)
        .map_err(|_| ApiError::BadRequest(format!("{name} must not be negative, got {value}")))
}
