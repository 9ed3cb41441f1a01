use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::FilmModel;
use crate::types::DbId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilmRepository: Send + Sync {
    async fn get(&self, film_id: DbId) -> Result<Option<FilmModel>, StorageError>;
    async fn get_list(&self) -> Result<Vec<FilmModel>, StorageError>;
}
