use super::Envelope;
use crate::error::ApiError;
use crate::params::ListParams;
use crate::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use blogpost_core::{Author, AuthorId, CreateAuthor, UpdateAuthor};

type AuthorResponse = Result<Json<Envelope<Author>>, ApiError>;

pub(super) async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateAuthor>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Author>>), ApiError> {
    let Json(input) = body?;
    let author = state.call(move |api| api.create_author(&input)).await?;
    Ok((StatusCode::CREATED, Json(Envelope::ok(author))))
}

pub(super) async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<AuthorId>, PathRejection>,
) -> AuthorResponse {
    let Path(id) = id?;
    let author = state.call(move |api| api.get_author(id)).await?;
    Ok(Json(Envelope::ok(author)))
}

pub(super) async fn list(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Envelope<Vec<Author>>>, ApiError> {
    let Query(params) = params?;
    let query = params.into_query()?;
    let authors = state.call(move |api| api.list_authors(&query)).await?;
    Ok(Json(Envelope::ok(authors)))
}

pub(super) async fn update(
    State(state): State<AppState>,
    body: Result<Json<UpdateAuthor>, JsonRejection>,
) -> AuthorResponse {
    let Json(input) = body?;
    let author = state.call(move |api| api.update_author(&input)).await?;
    Ok(Json(Envelope::ok(author)))
}

pub(super) async fn delete(
    State(state): State<AppState>,
    id: Result<Path<AuthorId>, PathRejection>,
) -> AuthorResponse {
    let Path(id) = id?;
    let author = state.call(move |api| api.delete_author(id)).await?;
    Ok(Json(Envelope::ok(author)))
}
