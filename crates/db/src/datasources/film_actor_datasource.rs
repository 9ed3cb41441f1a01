//! Datasource for the `film_actor` join table.

use sakila_core::error::StorageError;
use sakila_core::models::FilmActorModel;
use sakila_core::types::DbId;
use sqlx::PgPool;

use crate::entities::FilmActorEntity;
use crate::error::storage_error;

#[derive(Debug, Clone)]
pub struct FilmActorDatasource {
    pool: PgPool,
}

impl FilmActorDatasource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_actor_id(
        &self,
        actor_id: DbId,
    ) -> Result<Vec<FilmActorModel>, StorageError> {
        let rows = sqlx::query_as::<_, FilmActorEntity>(
            "SELECT actor_id, film_id, last_update FROM film_actor
             WHERE actor_id = $1
             ORDER BY film_id ASC",
        )
        .bind(actor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("film_actor.get_by_actor_id", e))?;
        Ok(rows.into_iter().map(FilmActorEntity::into_model).collect())
    }

    /// Returns the number of links removed.
    pub async fn delete_by_actor_id(&self, actor_id: DbId) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM film_actor WHERE actor_id = $1")
            .bind(actor_id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("film_actor.delete_by_actor_id", e))?;
        Ok(result.rows_affected())
    }
}
