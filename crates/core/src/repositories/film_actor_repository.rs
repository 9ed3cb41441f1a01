use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::FilmActorModel;
use crate::types::DbId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilmActorRepository: Send + Sync {
    async fn get_by_actor_id(&self, actor_id: DbId) -> Result<Vec<FilmActorModel>, StorageError>;

    /// Remove every association of `actor_id`, returning how many went.
    async fn delete_by_actor_id(&self, actor_id: DbId) -> Result<u64, StorageError>;
}
