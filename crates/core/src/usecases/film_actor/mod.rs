mod delete_film_actor_by_actor_id;
mod get_film_actor_by_actor_id;

pub use delete_film_actor_by_actor_id::DeleteFilmActorByActorIdUsecase;
pub use get_film_actor_by_actor_id::GetFilmActorByActorIdUsecase;
