use serde_json::{json, Value};

use crate::types::{DbId, Timestamp};

/// A film from the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmModel {
    pub film_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub last_update: Timestamp,
}

impl FilmModel {
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.film_id,
            "title": self.title,
            "description": self.description,
            "release_year": self.release_year,
        })
    }
}
