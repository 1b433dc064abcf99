//! REST transport.
//!
//! Success bodies are `{"message": "OK", "data": ...}`; failures are
//! `{"error": "..."}` with 400/404/500 by error tier.

mod article;
mod author;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub message: &'static str,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            message: "OK",
            data,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/v1/author",
            get(author::list).post(author::create).put(author::update),
        )
        .route("/v1/author/:id", get(author::get_by_id).delete(author::delete))
        .route(
            "/v1/article",
            get(article::list).post(article::create).put(article::update),
        )
        .route(
            "/v1/article/:id",
            get(article::get_by_id).delete(article::delete),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}
