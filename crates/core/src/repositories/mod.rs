//! Repository traits.
//!
//! Use-cases depend only on these; `sakila-db` provides the PostgreSQL
//! implementations. Every method surfaces storage failures as
//! [`StorageError`](crate::error::StorageError) and absence as `None`.

pub mod actor_repository;
pub mod film_actor_repository;
pub mod film_repository;

pub use actor_repository::ActorRepository;
pub use film_actor_repository::FilmActorRepository;
pub use film_repository::FilmRepository;

#[cfg(test)]
pub use actor_repository::MockActorRepository;
#[cfg(test)]
pub use film_actor_repository::MockFilmActorRepository;
#[cfg(test)]
pub use film_repository::MockFilmRepository;
