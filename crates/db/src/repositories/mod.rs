//! PostgreSQL implementations of the `sakila_core` repository traits.
//!
//! Each is a thin adapter over its datasource; the domain layer only ever
//! sees them as `Arc<dyn ...Repository>`.

pub mod actor_repository_impl;
pub mod film_actor_repository_impl;
pub mod film_repository_impl;

pub use actor_repository_impl::ActorRepositoryImpl;
pub use film_actor_repository_impl::FilmActorRepositoryImpl;
pub use film_repository_impl::FilmRepositoryImpl;
