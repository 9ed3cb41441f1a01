use std::sync::Arc;

use crate::error::StorageError;
use crate::repositories::FilmActorRepository;
use crate::types::DbId;

/// Drops every film association of one actor, leaving the actor in place.
pub struct DeleteFilmActorByActorIdUsecase {
    film_actor_repository: Arc<dyn FilmActorRepository>,
}

impl DeleteFilmActorByActorIdUsecase {
    pub fn new(film_actor_repository: Arc<dyn FilmActorRepository>) -> Self {
        Self {
            film_actor_repository,
        }
    }

    pub async fn execute(&self, actor_id: DbId) -> Result<u64, StorageError> {
        let removed = self
            .film_actor_repository
            .delete_by_actor_id(actor_id)
            .await?;
        tracing::debug!(actor_id, removed, "Film-actor links deleted");
        Ok(removed)
    }
}
