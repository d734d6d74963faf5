use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    AppState,
    entities::movies,
    error::{AppError, AppResult},
    models::{MovieFilter, MovieInput},
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/{id}", get(get_movie).put(update_movie).delete(delete_movie))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<MovieFilter>,
) -> AppResult<Json<Vec<movies::Model>>> {
    Ok(Json(state.store.list(&filter).await?))
}

async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<movies::Model>> {
    let movie = state.store.get(id).await?.ok_or(AppError::NotFound("movie"))?;
    Ok(Json(movie))
}

async fn create_movie(
    State(state): State<Arc<AppState>>,
    Json(input): Json<MovieInput>,
) -> AppResult<(StatusCode, Json<movies::Model>)> {
    let movie = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(input): Json<MovieInput>,
) -> AppResult<Json<movies::Model>> {
    let movie = state.store.update(id, input).await?.ok_or(AppError::NotFound("movie"))?;
    Ok(Json(movie))
}

async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    if state.store.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("movie"))
    }
}
