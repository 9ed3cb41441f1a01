//! Handlers for the film resource, mounted at `/api/film/v1/me`.
//!
//! Films are read-only here. The `actor/{actor_id}` routes expose the
//! actor/film join.

use axum::extract::State;
use axum::Json;
use sakila_core::models::{FilmActorModel, FilmModel};
use sakila_core::types::DbId;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::state::AppState;

/// GET /api/film/v1/me/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let films = state
        .film
        .get_list
        .execute()
        .await
        .ok_or_else(|| AppError::BadRequest("Film list not found".into()))?;
    Ok(Json(Value::Array(
        films.iter().map(FilmModel::to_json).collect(),
    )))
}

/// GET /api/film/v1/me/id/{film_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(film_id): IdPath<DbId>,
) -> AppResult<Json<Value>> {
    let film = state
        .film
        .get
        .execute(film_id)
        .await?
        .ok_or_else(|| AppError::not_found("Film"))?;
    Ok(Json(film.to_json()))
}

/// GET /api/film/v1/me/actor/{actor_id}
pub async fn list_by_actor(
    State(state): State<AppState>,
    IdPath(actor_id): IdPath<DbId>,
) -> AppResult<Json<Value>> {
    let links = state
        .film
        .get_film_actor_by_actor_id
        .execute(actor_id)
        .await?;
    Ok(Json(Value::Array(
        links.iter().map(FilmActorModel::to_json).collect(),
    )))
}

/// DELETE /api/film/v1/me/actor/{actor_id}
///
/// Responds with the number of links removed.
pub async fn delete_by_actor(
    State(state): State<AppState>,
    IdPath(actor_id): IdPath<DbId>,
) -> AppResult<Json<u64>> {
    let removed = state
        .film
        .delete_film_actor_by_actor_id
        .execute(actor_id)
        .await?;
    Ok(Json(removed))
}
