pub mod actor;
pub mod film;
