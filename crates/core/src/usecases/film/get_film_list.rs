use std::sync::Arc;

use crate::models::FilmModel;
use crate::repositories::FilmRepository;

pub struct GetFilmListUsecase {
    film_repository: Arc<dyn FilmRepository>,
}

impl GetFilmListUsecase {
    pub fn new(film_repository: Arc<dyn FilmRepository>) -> Self {
        Self { film_repository }
    }

    /// Same contract as the actor list: `None` on storage failure.
    pub async fn execute(&self) -> Option<Vec<FilmModel>> {
        match self.film_repository.get_list().await {
            Ok(films) => Some(films),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load film list");
                None
            }
        }
    }
}
