//! Row structs, one per table.
//!
//! Each entity mirrors its table column-for-column and converts to and
//! from the matching `sakila_core` model. Nothing outside the datasources
//! should hold one.

pub mod actor_entity;
pub mod film_actor_entity;
pub mod film_entity;

pub use actor_entity::ActorEntity;
pub use film_actor_entity::FilmActorEntity;
pub use film_entity::FilmEntity;
