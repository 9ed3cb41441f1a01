//! SQL access, one datasource per table.
//!
//! Each datasource owns a clone of the pool, speaks in domain models at its
//! public surface and in entity rows internally, and classifies driver
//! failures into `StorageError`.

pub mod actor_datasource;
pub mod film_actor_datasource;
pub mod film_datasource;

pub use actor_datasource::ActorDatasource;
pub use film_actor_datasource::FilmActorDatasource;
pub use film_datasource::FilmDatasource;
