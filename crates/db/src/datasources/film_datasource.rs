//! Datasource for the `film` table.

use sakila_core::error::StorageError;
use sakila_core::models::FilmModel;
use sakila_core::types::DbId;
use sqlx::PgPool;

use crate::entities::FilmEntity;
use crate::error::storage_error;

const COLUMNS: &str = "film_id, title, description, release_year, last_update";

#[derive(Debug, Clone)]
pub struct FilmDatasource {
    pool: PgPool,
}

impl FilmDatasource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, film_id: DbId) -> Result<Option<FilmModel>, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM film WHERE film_id = $1");
        let row = sqlx::query_as::<_, FilmEntity>(&query)
            .bind(film_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("film.get", e))?;
        Ok(row.map(FilmEntity::into_model))
    }

    pub async fn get_list(&self) -> Result<Vec<FilmModel>, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM film ORDER BY film_id ASC");
        let rows = sqlx::query_as::<_, FilmEntity>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("film.get_list", e))?;
        Ok(rows.into_iter().map(FilmEntity::into_model).collect())
    }

    /// Films an actor appears in, through `film_actor`. Backs the actor
    /// `films` relation.
    pub async fn get_by_actor_id(&self, actor_id: DbId) -> Result<Vec<FilmModel>, StorageError> {
        let rows = sqlx::query_as::<_, FilmEntity>(
            "SELECT f.film_id, f.title, f.description, f.release_year, f.last_update
             FROM film f
             JOIN film_actor fa ON fa.film_id = f.film_id
             WHERE fa.actor_id = $1
             ORDER BY f.film_id ASC",
        )
        .bind(actor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("film.get_by_actor_id", e))?;
        Ok(rows.into_iter().map(FilmEntity::into_model).collect())
    }
}
