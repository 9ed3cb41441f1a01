use sakila_core::models::FilmModel;
use sakila_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `film` table.
#[derive(Debug, Clone, FromRow)]
pub struct FilmEntity {
    pub film_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub last_update: Timestamp,
}

impl FilmEntity {
    pub fn into_model(self) -> FilmModel {
        FilmModel {
            film_id: self.film_id,
            title: self.title,
            description: self.description,
            release_year: self.release_year,
            last_update: self.last_update,
        }
    }
}
