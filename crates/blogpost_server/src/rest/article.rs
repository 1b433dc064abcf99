use super::Envelope;
use crate::error::ApiError;
use crate::params::ListParams;
use crate::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use blogpost_core::{Article, ArticleId, CreateArticle, PackedArticle, UpdateArticle};

type PackedResponse = Result<Json<Envelope<PackedArticle>>, ApiError>;

pub(super) async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateArticle>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<PackedArticle>>), ApiError> {
    let Json(input) = body?;
    let article = state.call(move |api| api.create_article(&input)).await?;
    Ok((StatusCode::CREATED, Json(Envelope::ok(article))))
}

pub(super) async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<ArticleId>, PathRejection>,
) -> PackedResponse {
    let Path(id) = id?;
    let article = state.call(move |api| api.get_article(id)).await?;
    Ok(Json(Envelope::ok(article)))
}

/// Listing carries `author_id` only, never the embedded author.
pub(super) async fn list(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Envelope<Vec<Article>>>, ApiError> {
    let Query(params) = params?;
    let query = params.into_query()?;
    let articles = state.call(move |api| api.list_articles(&query)).await?;
    Ok(Json(Envelope::ok(articles)))
}

pub(super) async fn update(
    State(state): State<AppState>,
    body: Result<Json<UpdateArticle>, JsonRejection>,
) -> PackedResponse {
    let Json(input) = body?;
    let article = state.call(move |api| api.update_article(&input)).await?;
    Ok(Json(Envelope::ok(article)))
}

pub(super) async fn delete(
    State(state): State<AppState>,
    id: Result<Path<ArticleId>, PathRejection>,
) -> PackedResponse {
    let Path(id) = id?;
    let article = state.call(move |api| api.delete_article(id)).await?;
    Ok(Json(Envelope::ok(article)))
}
