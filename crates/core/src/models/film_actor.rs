use serde_json::{json, Value};

use crate::types::{DbId, Timestamp};

/// One row of the actor/film join.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmActorModel {
    pub actor_id: DbId,
    pub film_id: DbId,
    pub last_update: Timestamp,
}

impl FilmActorModel {
    pub fn to_json(&self) -> Value {
        json!({
            "actor_id": self.actor_id,
            "film_id": self.film_id,
        })
    }
}
