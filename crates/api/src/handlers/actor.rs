//! Handlers for the actor resource, mounted at `/api/actor/v1/me`.
//!
//! Absence is reported as 404 `{"message": "Actor not found"}` on every
//! by-id route; an unavailable list is 400.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sakila_core::models::{ActorChanges, ActorFilter, ActorModel, ActorRelation};
use sakila_core::types::DbId;
use serde_json::Value;

use crate::dtos::actor_dto::{CreateActorDto, UpdateActorDto};
use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch an actor by id or fail with 404.
async fn ensure_actor_exists(
    state: &AppState,
    actor_id: DbId,
    relations: &[ActorRelation],
) -> AppResult<ActorModel> {
    state
        .actor
        .get
        .execute(&ActorFilter::by_id(actor_id), relations)
        .await?
        .ok_or_else(|| AppError::not_found("Actor"))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/actor/v1/me/id/{actor_id}
///
/// The `films` relation is always loaded.
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(actor_id): IdPath<DbId>,
) -> AppResult<Json<Value>> {
    let actor = ensure_actor_exists(&state, actor_id, &[ActorRelation::Films]).await?;
    Ok(Json(actor.to_json()))
}

/// GET /api/actor/v1/me/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let actors = state
        .actor
        .get_list
        .execute()
        .await
        .ok_or_else(|| AppError::BadRequest("Actor list not found".into()))?;
    Ok(Json(Value::Array(
        actors.iter().map(ActorModel::to_json).collect(),
    )))
}

/// POST /api/actor/v1/me/
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateActorDto>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let actor = state
        .actor
        .create
        .execute(input.first_name, input.last_name)
        .await?;
    Ok((StatusCode::CREATED, Json(actor.to_json())))
}

/// PUT /api/actor/v1/me/id/{actor_id}
///
/// Responds with whether anything was written; an empty body is `false`.
pub async fn update(
    State(state): State<AppState>,
    IdPath(actor_id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateActorDto>,
) -> AppResult<Json<bool>> {
    let actor = ensure_actor_exists(&state, actor_id, &[]).await?;
    let changes: ActorChanges = input.into();
    let updated = state.actor.update.execute(&actor, &changes).await?;
    Ok(Json(updated))
}

/// DELETE /api/actor/v1/me/id/{actor_id}
///
/// The actor's film links go with it; a failed delete leaves both in place.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(actor_id): IdPath<DbId>,
) -> AppResult<Json<bool>> {
    let actor = ensure_actor_exists(&state, actor_id, &[]).await?;
    let deleted = state.actor.delete.execute(&actor).await?;
    Ok(Json(deleted))
}
