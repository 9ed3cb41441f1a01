use std::sync::Arc;

use crate::error::StorageError;
use crate::models::FilmActorModel;
use crate::repositories::FilmActorRepository;
use crate::types::DbId;

/// Lists the film associations of one actor.
pub struct GetFilmActorByActorIdUsecase {
    film_actor_repository: Arc<dyn FilmActorRepository>,
}

impl GetFilmActorByActorIdUsecase {
    pub fn new(film_actor_repository: Arc<dyn FilmActorRepository>) -> Self {
        Self {
            film_actor_repository,
        }
    }

    pub async fn execute(&self, actor_id: DbId) -> Result<Vec<FilmActorModel>, StorageError> {
        self.film_actor_repository.get_by_actor_id(actor_id).await
    }
}
