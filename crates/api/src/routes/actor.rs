use axum::routing::get;
use axum::Router;

use crate::handlers::actor;
use crate::state::AppState;

const BASE: &str = "/api/actor/v1/me";

/// Actor routes. The collection answers with and without the trailing
/// slash.
///
/// ```text
/// GET    /api/actor/v1/me/                  -> list
/// POST   /api/actor/v1/me/                  -> create
/// GET    /api/actor/v1/me/id/{actor_id}     -> get_by_id
/// PUT    /api/actor/v1/me/id/{actor_id}     -> update
/// DELETE /api/actor/v1/me/id/{actor_id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(BASE, get(actor::list).post(actor::create))
        .route(&format!("{BASE}/"), get(actor::list).post(actor::create))
        .route(
            &format!("{BASE}/id/{{actor_id}}"),
            get(actor::get_by_id)
                .put(actor::update)
                .delete(actor::delete),
        )
}
