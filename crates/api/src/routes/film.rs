use axum::routing::get;
use axum::Router;

use crate::handlers::film;
use crate::state::AppState;

const BASE: &str = "/api/film/v1/me";

/// Film routes.
///
/// ```text
/// GET    /api/film/v1/me/                   -> list
/// GET    /api/film/v1/me/id/{film_id}       -> get_by_id
/// GET    /api/film/v1/me/actor/{actor_id}   -> list_by_actor
/// DELETE /api/film/v1/me/actor/{actor_id}   -> delete_by_actor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(BASE, get(film::list))
        .route(&format!("{BASE}/"), get(film::list))
        .route(&format!("{BASE}/id/{{film_id}}"), get(film::get_by_id))
        .route(
            &format!("{BASE}/actor/{{actor_id}}"),
            get(film::list_by_actor).delete(film::delete_by_actor),
        )
}
