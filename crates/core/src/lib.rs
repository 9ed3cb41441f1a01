//! Domain layer of the Sakila service.
//!
//! Holds the storage-agnostic models, the repository traits the storage
//! layer implements, and the single-operation use-cases the HTTP handlers
//! call. Nothing in here knows about SQL or HTTP.

pub mod clock;
pub mod error;
pub mod models;
pub mod repositories;
pub mod types;
pub mod usecases;
