use super::{RpcError, METHOD_NOT_FOUND};
use crate::error::ApiError;
use crate::params::{IdParams, ListParams};
use crate::AppState;
use blogpost_core::{CreateArticle, CreateAuthor, UpdateArticle, UpdateAuthor};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub(super) async fn dispatch(
    state: &AppState,
    method: &str,
    params: Value,
) -> Result<Value, RpcError> {
    match method {
        "AuthorService.Create" => {
            let input: CreateAuthor = decode(params)?;
            encode(state.call(move |api| api.create_author(&input)).await?)
        }
        "AuthorService.GetById" => {
            let IdParams { id } = decode(params)?;
            encode(state.call(move |api| api.get_author(id)).await?)
        }
        "AuthorService.GetList" => {
            let query = decode_list(params)?;
            encode(state.call(move |api| api.list_authors(&query)).await?)
        }
        "AuthorService.Update" => {
            let input: UpdateAuthor = decode(params)?;
            encode(state.call(move |api| api.update_author(&input)).await?)
        }
        "AuthorService.Delete" => {
            let IdParams { id } = decode(params)?;
            encode(state.call(move |api| api.delete_author(id)).await?)
        }
        "ArticleService.Create" => {
            let input: CreateArticle = decode(params)?;
            encode(state.call(move |api| api.create_article(&input)).await?)
        }
        "ArticleService.GetById" => {
            let IdParams { id } = decode(params)?;
            encode(state.call(move |api| api.get_article(id)).await?)
        }
        "ArticleService.GetList" => {
            let query = decode_list(params)?;
            encode(state.call(move |api| api.list_articles(&query)).await?)
        }
        "ArticleService.Update" => {
            let input: UpdateArticle = decode(params)?;
            encode(state.call(move |api| api.update_article(&input)).await?)
        }
        "ArticleService.Delete" => {
            let IdParams { id } = decode(params)?;
            encode(state.call(move |api| api.delete_article(id)).await?)
        }
        other => Err(RpcError {
            code: METHOD_NOT_FOUND,
            message: format!("method not found: {other}"),
            data: None,
        }),
    }
}

fn decode<T: DeserializeOwned>(params: Value) -> Result<T, ApiError> {
    serde_json::from_value(params)
        .map_err(|err| ApiError::BadRequest(format!("invalid params: {err}")))
}

fn decode_list(params: Value) -> Result<blogpost_core::ListQuery, ApiError> {
    let params = if params.is_null() {
        ListParams::default()
    } else {
        decode(params)?
    };
    params.into_query()
}

fn encode<T: Serialize>(value: T) -> Result<Value, RpcError> {
    serde_json::to_value(value)
        .map_err(|err| ApiError::Internal(format!("failed to encode result: {err}")).into())
}
