//! HTTP transports for the blogpost service.
//!
//! # Responsibility
//! - Decode REST and JSON-RPC requests into `BlogApi` calls.
//! - Encode results and map failures to each wire format's status codes.
//!
//! # Invariants
//! - Adapters hold nothing but an `Arc<dyn BlogApi>`.
//! - Both adapters classify failures through `ApiError::kind`.

pub mod config;
pub mod error;
pub mod params;
pub mod rest;
pub mod rpc;

use blogpost_core::{BlogApi, RepoResult};
use error::ApiError;
use std::sync::Arc;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    api: Arc<dyn BlogApi>,
}

impl AppState {
    pub fn new(api: Arc<dyn BlogApi>) -> Self {
        Self { api }
    }

    /// Runs a blocking `BlogApi` call off the async executor.
    pub(crate) async fn call<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn BlogApi) -> RepoResult<T> + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let result = tokio::task::spawn_blocking(move || f(api.as_ref()))
            .await
            .map_err(|err| ApiError::Internal(format!("blocking task failed: {err}")))?;
        Ok(result?)
    }
}
