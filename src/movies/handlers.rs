use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::movies::error::ApiError;
use crate::movies::filter;
use crate::server::AppState;

pub async fn most_popular(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let page = state.tmdb.most_popular().await?;
    Ok(Json(page.results))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let page = state.tmdb.search(params.title.as_deref()).await?;
    Ok(Json(filter::with_posters(page.results)))
}

pub async fn movie_detail(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let detail = state.tmdb.movie_detail(&movie_id).await?;
    Ok(Json(detail))
}
