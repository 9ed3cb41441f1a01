use async_trait::async_trait;
use sakila_core::error::StorageError;
use sakila_core::models::{ActorChanges, ActorFilter, ActorModel, ActorRelation};
use sakila_core::repositories::ActorRepository;
use sakila_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::datasources::ActorDatasource;

pub struct ActorRepositoryImpl {
    datasource: ActorDatasource,
}

impl ActorRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self {
            datasource: ActorDatasource::new(pool),
        }
    }
}

#[async_trait]
impl ActorRepository for ActorRepositoryImpl {
    async fn create(&self, actor: &ActorModel) -> Result<(), StorageError> {
        self.datasource.create(actor).await
    }

    async fn get(
        &self,
        filter: &ActorFilter,
        relations: &[ActorRelation],
    ) -> Result<Option<ActorModel>, StorageError> {
        self.datasource.get(filter, relations).await
    }

    async fn get_list(&self) -> Result<Vec<ActorModel>, StorageError> {
        self.datasource.get_list().await
    }

    async fn get_max_id(&self) -> Result<DbId, StorageError> {
        self.datasource.get_max_id().await
    }

    async fn update(
        &self,
        actor: &ActorModel,
        changes: &ActorChanges,
        last_update: Timestamp,
    ) -> Result<bool, StorageError> {
        self.datasource.update(actor, changes, last_update).await
    }

    async fn delete(&self, actor: &ActorModel) -> Result<bool, StorageError> {
        self.datasource.delete(actor).await
    }
}
