use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{ActorChanges, ActorFilter, ActorModel, ActorRelation};
use crate::types::{DbId, Timestamp};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActorRepository: Send + Sync {
    /// Insert `actor` as a new row. Fails if its id is already taken.
    async fn create(&self, actor: &ActorModel) -> Result<(), StorageError>;

    /// First actor matching `filter`, with `relations` eager-loaded.
    async fn get(
        &self,
        filter: &ActorFilter,
        relations: &[ActorRelation],
    ) -> Result<Option<ActorModel>, StorageError>;

    async fn get_list(&self) -> Result<Vec<ActorModel>, StorageError>;

    /// Highest stored actor id, or `0` for an empty table.
    async fn get_max_id(&self) -> Result<DbId, StorageError>;

    /// Apply the present fields of `changes`. Returns whether a row changed.
    async fn update(
        &self,
        actor: &ActorModel,
        changes: &ActorChanges,
        last_update: Timestamp,
    ) -> Result<bool, StorageError>;

    /// Remove the actor together with its film links, atomically. Returns
    /// whether the actor row was removed.
    async fn delete(&self, actor: &ActorModel) -> Result<bool, StorageError>;
}
