pub mod actor;
pub mod film;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the versioned API route tree.
///
/// Each entity carries its own version segment:
///
/// ```text
/// /api/actor/v1/me/                    list, create
/// /api/actor/v1/me/id/{actor_id}       get, update, delete
///
/// /api/film/v1/me/                     list
/// /api/film/v1/me/id/{film_id}         get
/// /api/film/v1/me/actor/{actor_id}     list links, delete links
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(actor::router())
        .merge(film::router())
}
