mod get_film;
mod get_film_list;

use std::sync::Arc;

pub use get_film::GetFilmUsecase;
pub use get_film_list::GetFilmListUsecase;

use crate::repositories::{FilmActorRepository, FilmRepository};
use crate::usecases::film_actor::{DeleteFilmActorByActorIdUsecase, GetFilmActorByActorIdUsecase};

/// Film catalogue lookups plus the actor/film association use-cases.
pub struct FilmUsecases {
    pub get: GetFilmUsecase,
    pub get_list: GetFilmListUsecase,
    pub get_film_actor_by_actor_id: GetFilmActorByActorIdUsecase,
    pub delete_film_actor_by_actor_id: DeleteFilmActorByActorIdUsecase,
}

impl FilmUsecases {
    pub fn new(
        film_repository: Arc<dyn FilmRepository>,
        film_actor_repository: Arc<dyn FilmActorRepository>,
    ) -> Self {
        Self {
            get: GetFilmUsecase::new(Arc::clone(&film_repository)),
            get_list: GetFilmListUsecase::new(film_repository),
            get_film_actor_by_actor_id: GetFilmActorByActorIdUsecase::new(Arc::clone(
                &film_actor_repository,
            )),
            delete_film_actor_by_actor_id: DeleteFilmActorByActorIdUsecase::new(
                film_actor_repository,
            ),
        }
    }
}
