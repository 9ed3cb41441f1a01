#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use sakila_api::config::ServerConfig;
use sakila_api::router::build_app_router;
use sakila_api::state::{AppState, Repositories};
use sakila_core::clock::Clock;
use sakila_core::error::StorageError;
use sakila_core::models::{
    ActorChanges, ActorFilter, ActorModel, ActorRelation, FilmActorModel, FilmModel,
};
use sakila_core::repositories::{ActorRepository, FilmActorRepository, FilmRepository};
use sakila_core::types::{DbId, Timestamp};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://sakila@127.0.0.1:1/sakila".to_string(),
        database_max_connections: 1,
    }
}

/// Instant every seeded row is stamped with.
pub fn fixed_now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

/// Moves one second forward on every reading, starting one second after
/// [`fixed_now`], so each write gets a later stamp than the one before.
#[derive(Default)]
struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn now(&self) -> Timestamp {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst) + 1;
        fixed_now() + ChronoDuration::seconds(tick)
    }
}

/// Same conjunctive predicate the Postgres datasource builds.
fn filter_matches(filter: &ActorFilter, actor: &ActorModel) -> bool {
    filter.actor_id().map_or(true, |id| actor.actor_id == id)
        && filter.first_name().map_or(true, |name| actor.first_name == name)
        && filter.last_name().map_or(true, |name| actor.last_name == name)
}

fn apply_changes(changes: &ActorChanges, actor: &mut ActorModel, last_update: Timestamp) -> bool {
    if changes.is_empty() {
        return false;
    }
    if let Some(first_name) = &changes.first_name {
        actor.first_name.clone_from(first_name);
    }
    if let Some(last_name) = &changes.last_name {
        actor.last_name.clone_from(last_name);
    }
    actor.last_update = last_update;
    true
}

// ---------------------------------------------------------------------------
// In-memory storage
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Tables {
    actors: BTreeMap<DbId, ActorModel>,
    films: BTreeMap<DbId, FilmModel>,
    film_actors: Vec<FilmActorModel>,
}

/// In-memory stand-in for the three Postgres tables.
///
/// Mirrors the storage contract: duplicate actor ids are conflicts and an
/// actor delete takes its film links with it, all or nothing.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failing: AtomicBool,
    failing_deletes: AtomicBool,
}

impl MemoryStore {
    /// Make every subsequent read fail with a database error.
    pub fn fail_reads(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Make actor deletes fail with a database error, removing nothing.
    pub fn fail_actor_deletes(&self) {
        self.failing_deletes.store(true, Ordering::SeqCst);
    }

    pub fn insert_actor(&self, actor_id: DbId, first_name: &str, last_name: &str) {
        let actor = ActorModel::new(actor_id, first_name, last_name, fixed_now());
        self.tables.lock().unwrap().actors.insert(actor_id, actor);
    }

    pub fn insert_film(&self, film_id: DbId, title: &str) {
        let film = FilmModel {
            film_id,
            title: title.to_string(),
            description: None,
            release_year: Some(2006),
            last_update: fixed_now(),
        };
        self.tables.lock().unwrap().films.insert(film_id, film);
    }

    pub fn link(&self, actor_id: DbId, film_id: DbId) {
        self.tables.lock().unwrap().film_actors.push(FilmActorModel {
            actor_id,
            film_id,
            last_update: fixed_now(),
        });
    }

    pub fn actor(&self, actor_id: DbId) -> Option<ActorModel> {
        self.tables.lock().unwrap().actors.get(&actor_id).cloned()
    }

    pub fn link_count(&self, actor_id: DbId) -> usize {
        self.tables
            .lock()
            .unwrap()
            .film_actors
            .iter()
            .filter(|link| link.actor_id == actor_id)
            .count()
    }

    fn check(&self, operation: &'static str) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::database(operation, "connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl ActorRepository for MemoryStore {
    async fn create(&self, actor: &ActorModel) -> Result<(), StorageError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.actors.contains_key(&actor.actor_id) {
            return Err(StorageError::conflict(
                "create actor",
                "violates constraint actor_pkey",
            ));
        }
        tables.actors.insert(actor.actor_id, actor.clone());
        Ok(())
    }

    async fn get(
        &self,
        filter: &ActorFilter,
        relations: &[ActorRelation],
    ) -> Result<Option<ActorModel>, StorageError> {
        self.check("get actor")?;
        let tables = self.tables.lock().unwrap();
        let Some(mut actor) = tables.actors.values().find(|a| filter_matches(filter, a)).cloned() else {
            return Ok(None);
        };
        if relations.contains(&ActorRelation::Films) {
            let films = tables
                .film_actors
                .iter()
                .filter(|link| link.actor_id == actor.actor_id)
                .filter_map(|link| tables.films.get(&link.film_id).cloned())
                .collect();
            actor.films = Some(films);
        }
        Ok(Some(actor))
    }

    async fn get_list(&self) -> Result<Vec<ActorModel>, StorageError> {
        self.check("list actors")?;
        Ok(self.tables.lock().unwrap().actors.values().cloned().collect())
    }

    async fn get_max_id(&self) -> Result<DbId, StorageError> {
        self.check("max actor id")?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.actors.keys().next_back().copied().unwrap_or(0))
    }

    async fn update(
        &self,
        actor: &ActorModel,
        changes: &ActorChanges,
        last_update: Timestamp,
    ) -> Result<bool, StorageError> {
        let mut tables = self.tables.lock().unwrap();
        match tables.actors.get_mut(&actor.actor_id) {
            Some(stored) => Ok(apply_changes(changes, stored, last_update)),
            None => Ok(false),
        }
    }

    async fn delete(&self, actor: &ActorModel) -> Result<bool, StorageError> {
        if self.failing_deletes.load(Ordering::SeqCst) {
            return Err(StorageError::database("delete actor", "connection reset"));
        }
        let mut tables = self.tables.lock().unwrap();
        tables
            .film_actors
            .retain(|link| link.actor_id != actor.actor_id);
        Ok(tables.actors.remove(&actor.actor_id).is_some())
    }
}

#[async_trait]
impl FilmRepository for MemoryStore {
    async fn get(&self, film_id: DbId) -> Result<Option<FilmModel>, StorageError> {
        self.check("get film")?;
        Ok(self.tables.lock().unwrap().films.get(&film_id).cloned())
    }

    async fn get_list(&self) -> Result<Vec<FilmModel>, StorageError> {
        self.check("list films")?;
        Ok(self.tables.lock().unwrap().films.values().cloned().collect())
    }
}

#[async_trait]
impl FilmActorRepository for MemoryStore {
    async fn get_by_actor_id(&self, actor_id: DbId) -> Result<Vec<FilmActorModel>, StorageError> {
        self.check("list film actors")?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .film_actors
            .iter()
            .filter(|link| link.actor_id == actor_id)
            .cloned()
            .collect())
    }

    async fn delete_by_actor_id(&self, actor_id: DbId) -> Result<u64, StorageError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.film_actors.len();
        tables.film_actors.retain(|link| link.actor_id != actor_id);
        Ok((before - tables.film_actors.len()) as u64)
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router over an in-memory store.
///
/// The pool is lazy and points at a closed port, so only `/health` ever
/// touches it (and reports the database as unreachable).
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy(&config.database_url)
        .expect("lazy pool");

    let repositories = Repositories {
        actor: store.clone(),
        film: store.clone(),
        film_actor: store,
    };

    build_app_router(AppState::new(pool, config, repositories, Arc::new(SteppingClock::default())))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::delete(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::put(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
