//! Datasource for the `actor` table.

use sakila_core::error::StorageError;
use sakila_core::models::{ActorChanges, ActorFilter, ActorModel, ActorRelation};
use sakila_core::types::{DbId, Timestamp};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::datasources::FilmDatasource;
use crate::entities::ActorEntity;
use crate::error::storage_error;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "actor_id, first_name, last_name, last_update";

#[derive(Debug, Clone)]
pub struct ActorDatasource {
    pool: PgPool,
    films: FilmDatasource,
}

impl ActorDatasource {
    pub fn new(pool: PgPool) -> Self {
        Self {
            films: FilmDatasource::new(pool.clone()),
            pool,
        }
    }

    /// Insert a new row. The id comes from the model, not from a sequence.
    pub async fn create(&self, actor: &ActorModel) -> Result<(), StorageError> {
        let entity = ActorEntity::from(actor);
        sqlx::query(
            "INSERT INTO actor (actor_id, first_name, last_name, last_update)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(entity.actor_id)
        .bind(&entity.first_name)
        .bind(&entity.last_name)
        .bind(entity.last_update)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("actor.create", e))?;
        Ok(())
    }

    /// First actor (lowest id) matching `filter`, with `relations` loaded.
    pub async fn get(
        &self,
        filter: &ActorFilter,
        relations: &[ActorRelation],
    ) -> Result<Option<ActorModel>, StorageError> {
        let entity = select_by_filter(filter)
            .build_query_as::<ActorEntity>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("actor.get", e))?;

        let Some(entity) = entity else {
            return Ok(None);
        };

        let mut actor = entity.into_model();
        if relations.contains(&ActorRelation::Films) {
            actor.films = Some(self.films.get_by_actor_id(actor.actor_id).await?);
        }
        Ok(Some(actor))
    }

    /// All actors ordered by id.
    pub async fn get_list(&self) -> Result<Vec<ActorModel>, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM actor ORDER BY actor_id ASC");
        let rows = sqlx::query_as::<_, ActorEntity>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("actor.get_list", e))?;
        Ok(rows.into_iter().map(ActorEntity::into_model).collect())
    }

    /// Highest actor id, `0` when the table is empty.
    pub async fn get_max_id(&self) -> Result<DbId, StorageError> {
        let max = sqlx::query_scalar::<_, Option<DbId>>("SELECT MAX(actor_id) FROM actor")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("actor.get_max_id", e))?;
        Ok(max.unwrap_or(0))
    }

    /// Write the present fields of `changes` plus `last_update`.
    ///
    /// Returns `false` without touching the database when `changes` is empty,
    /// otherwise whether the row still existed.
    pub async fn update(
        &self,
        actor: &ActorModel,
        changes: &ActorChanges,
        last_update: Timestamp,
    ) -> Result<bool, StorageError> {
        let Some(mut statement) = update_statement(actor.actor_id, changes, last_update) else {
            return Ok(false);
        };
        let result = statement
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("actor.update", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete the actor and its `film_actor` links in one transaction.
    /// Returns `true` if the actor row was removed; on any failure nothing
    /// is deleted.
    pub async fn delete(&self, actor: &ActorModel) -> Result<bool, StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("actor.delete", e))?;

        let links = sqlx::query("DELETE FROM film_actor WHERE actor_id = $1")
            .bind(actor.actor_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_error("actor.delete", e))?;

        let result = sqlx::query("DELETE FROM actor WHERE actor_id = $1")
            .bind(actor.actor_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_error("actor.delete", e))?;

        tx.commit()
            .await
            .map_err(|e| storage_error("actor.delete", e))?;

        tracing::debug!(
            actor_id = actor.actor_id,
            links_removed = links.rows_affected(),
            "Actor delete committed"
        );
        Ok(result.rows_affected() > 0)
    }
}

/// `SELECT` over the non-empty filter fields, joined with `AND`.
fn select_by_filter(filter: &ActorFilter) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {COLUMNS} FROM actor"));

    if !filter.is_empty() {
        builder.push(" WHERE ");
        let mut conditions = builder.separated(" AND ");
        if let Some(actor_id) = filter.actor_id() {
            conditions.push("actor_id = ").push_bind_unseparated(actor_id);
        }
        if let Some(first_name) = filter.first_name() {
            conditions.push("first_name = ").push_bind_unseparated(first_name);
        }
        if let Some(last_name) = filter.last_name() {
            conditions.push("last_name = ").push_bind_unseparated(last_name);
        }
    }

    builder.push(" ORDER BY actor_id ASC LIMIT 1");
    builder
}

/// `UPDATE` touching only the fields present in `changes`.
fn update_statement(
    actor_id: DbId,
    changes: &ActorChanges,
    last_update: Timestamp,
) -> Option<QueryBuilder<'_, Postgres>> {
    if changes.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::new("UPDATE actor SET ");
    let mut assignments = builder.separated(", ");
    if let Some(first_name) = &changes.first_name {
        assignments
            .push("first_name = ")
            .push_bind_unseparated(first_name.as_str());
    }
    if let Some(last_name) = &changes.last_name {
        assignments
            .push("last_name = ")
            .push_bind_unseparated(last_name.as_str());
    }
    assignments
        .push("last_update = ")
        .push_bind_unseparated(last_update);

    builder.push(" WHERE actor_id = ").push_bind(actor_id);
    Some(builder)
}
