//! JSON-RPC 2.0 transport.
//!
//! Served as `POST /rpc`. Method names mirror the `AuthorService` /
//! `ArticleService` RPC services; params and results reuse the REST
//! entity shapes, so the two transports differ only in framing.

mod methods;

use crate::error::ApiError;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use blogpost_core::ErrorKind;
use log::error;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const JSONRPC_VERSION: &str = "2.0";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;
/// Server-defined code for missing or tombstoned entities.
pub const NOT_FOUND: i64 = -32004;

#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub id: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: Value,
}

impl RpcResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    fn failure(id: Value, error: RpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    fn protocol(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl From<ApiError> for RpcError {
    fn from(value: ApiError) -> Self {
        let (code, status) = match value.kind() {
            ErrorKind::Validation => (INVALID_PARAMS, "INVALID_ARGUMENT"),
            ErrorKind::NotFound => (NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Store => (INTERNAL_ERROR, "INTERNAL"),
        };
        if code == INTERNAL_ERROR {
            error!("event=rpc_call module=rpc status=error error={value}");
        }
        Self {
            code,
            message: value.to_string(),
            data: Some(json!({ "status": status })),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/rpc", post(handle)).with_state(state)
}

async fn handle(State(state): State<AppState>, body: Bytes) -> Json<RpcResponse> {
    let raw: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(err) => {
            return Json(RpcResponse::failure(
                Value::Null,
                RpcError::protocol(PARSE_ERROR, format!("parse error: {err}")),
            ))
        }
    };

    let id = raw.get("id").cloned().unwrap_or(Value::Null);
    let request: RpcRequest = match serde_json::from_value(raw) {
        Ok(request) => request,
        Err(err) => {
            return Json(RpcResponse::failure(
                id,
                RpcError::protocol(INVALID_REQUEST, format!("invalid request: {err}")),
            ))
        }
    };

    if request.jsonrpc != JSONRPC_VERSION {
        return Json(RpcResponse::failure(
            request.id,
            RpcError::protocol(
                INVALID_REQUEST,
                format!("unsupported jsonrpc version `{}`", request.jsonrpc),
            ),
        ));
    }

    let response = match methods::dispatch(&state, &request.method, request.params).await {
        Ok(result) => RpcResponse::success(request.id, result),
        Err(err) => RpcResponse::failure(request.id, err),
    };
    Json(response)
}
