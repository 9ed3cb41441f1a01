//! Storage-agnostic domain models.
//!
//! Each model is converted to and from its row struct at the datasource
//! boundary and serialized for HTTP through `to_json`.

pub mod actor;
pub mod film;
pub mod film_actor;

pub use actor::{ActorChanges, ActorFilter, ActorModel, ActorRelation};
pub use film::FilmModel;
pub use film_actor::FilmActorModel;
