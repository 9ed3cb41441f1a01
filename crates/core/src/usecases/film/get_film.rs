use std::sync::Arc;

use crate::error::StorageError;
use crate::models::FilmModel;
use crate::repositories::FilmRepository;
use crate::types::DbId;

pub struct GetFilmUsecase {
    film_repository: Arc<dyn FilmRepository>,
}

impl GetFilmUsecase {
    pub fn new(film_repository: Arc<dyn FilmRepository>) -> Self {
        Self { film_repository }
    }

    pub async fn execute(&self, film_id: DbId) -> Result<Option<FilmModel>, StorageError> {
        self.film_repository.get(film_id).await
    }
}
