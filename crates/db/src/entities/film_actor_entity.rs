use sakila_core::models::FilmActorModel;
use sakila_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `film_actor` join table.
#[derive(Debug, Clone, FromRow)]
pub struct FilmActorEntity {
    pub actor_id: DbId,
    pub film_id: DbId,
    pub last_update: Timestamp,
}

impl FilmActorEntity {
    pub fn into_model(self) -> FilmActorModel {
        FilmActorModel {
            actor_id: self.actor_id,
            film_id: self.film_id,
            last_update: self.last_update,
        }
    }
}
