use std::sync::Arc;

use sakila_core::clock::Clock;
use sakila_core::repositories::{ActorRepository, FilmActorRepository, FilmRepository};
use sakila_core::usecases::actor::ActorUsecases;
use sakila_core::usecases::film::FilmUsecases;
use sakila_db::repositories::{ActorRepositoryImpl, FilmActorRepositoryImpl, FilmRepositoryImpl};
use sakila_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks).
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Actor use-cases.
    pub actor: Arc<ActorUsecases>,
    /// Film and film-actor use-cases.
    pub film: Arc<FilmUsecases>,
}

/// The repository implementations the use-cases run against.
pub struct Repositories {
    pub actor: Arc<dyn ActorRepository>,
    pub film: Arc<dyn FilmRepository>,
    pub film_actor: Arc<dyn FilmActorRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool.
    pub fn postgres(pool: &DbPool) -> Self {
        Self {
            actor: Arc::new(ActorRepositoryImpl::new(pool.clone())),
            film: Arc::new(FilmRepositoryImpl::new(pool.clone())),
            film_actor: Arc::new(FilmActorRepositoryImpl::new(pool.clone())),
        }
    }
}

impl AppState {
    /// Wire every use-case against `repositories`.
    pub fn new(
        pool: DbPool,
        config: ServerConfig,
        repositories: Repositories,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            actor: Arc::new(ActorUsecases::new(repositories.actor, clock)),
            film: Arc::new(FilmUsecases::new(
                repositories.film,
                repositories.film_actor,
            )),
        }
    }
}
