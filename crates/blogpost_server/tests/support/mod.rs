#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use blogpost_core::{BlogApi, BlogService, Database};
use blogpost_server::{rest, rpc, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// REST and RPC routers sharing one in-memory service.
pub struct Apps {
    pub rest: Router,
    pub rpc: Router,
}

pub fn apps() -> Apps {
    let db = Database::open_in_memory().unwrap();
    let api: Arc<dyn BlogApi> = Arc::new(BlogService::new(db));
    let state = AppState::new(api);
    Apps {
        rest: rest::router(state.clone()),
        rpc: rpc::router(state),
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn rest_call(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send(app, request).await
}

pub async fn rpc_call(app: &Router, method: &str, params: Value) -> Value {
    let request = Request::builder()
        .method("POST")
        .uri("/rpc")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "jsonrpc": "2.0", "method": method, "params": params, "id": 1 })
                .to_string(),
        ))
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    body
}
