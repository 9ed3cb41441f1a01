use async_trait::async_trait;
use sakila_core::error::StorageError;
use sakila_core::models::FilmActorModel;
use sakila_core::repositories::FilmActorRepository;
use sakila_core::types::DbId;
use sqlx::PgPool;

use crate::datasources::FilmActorDatasource;

pub struct FilmActorRepositoryImpl {
    datasource: FilmActorDatasource,
}

impl FilmActorRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self {
            datasource: FilmActorDatasource::new(pool),
        }
    }
}

#[async_trait]
impl FilmActorRepository for FilmActorRepositoryImpl {
    async fn get_by_actor_id(&self, actor_id: DbId) -> Result<Vec<FilmActorModel>, StorageError> {
        self.datasource.get_by_actor_id(actor_id).await
    }

    async fn delete_by_actor_id(&self, actor_id: DbId) -> Result<u64, StorageError> {
        self.datasource.delete_by_actor_id(actor_id).await
    }
}
