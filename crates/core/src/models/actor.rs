//! Actor model plus the lookup filter and partial-update payload that
//! travel with it through the repository.

use serde_json::{json, Value};

use crate::models::film::FilmModel;
use crate::types::{DbId, Timestamp};

/// An actor, independent of how it is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorModel {
    pub actor_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub last_update: Timestamp,
    /// `Some` only when the `films` relation was requested.
    pub films: Option<Vec<FilmModel>>,
}

impl ActorModel {
    pub fn new(
        actor_id: DbId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        last_update: Timestamp,
    ) -> Self {
        Self {
            actor_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            last_update,
            films: None,
        }
    }

    /// External representation: `{id, first_name, last_name}`, with a
    /// `films` array appended when the relation is loaded.
    pub fn to_json(&self) -> Value {
        let mut value = json!({
            "id": self.actor_id,
            "first_name": self.first_name,
            "last_name": self.last_name,
        });
        if let Some(films) = &self.films {
            value["films"] = Value::Array(films.iter().map(FilmModel::to_json).collect());
        }
        value
    }
}

/// Relations that can be eager-loaded alongside an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRelation {
    Films,
}

/// Conjunctive equality filter for actor lookups.
///
/// Empty name strings count as "not provided". A filter with nothing set
/// matches the first actor by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorFilter {
    pub actor_id: Option<DbId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ActorFilter {
    pub fn by_id(actor_id: DbId) -> Self {
        Self {
            actor_id: Some(actor_id),
            ..Self::default()
        }
    }

    pub fn actor_id(&self) -> Option<DbId> {
        self.actor_id
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref().filter(|s| !s.is_empty())
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.actor_id().is_none() && self.first_name().is_none() && self.last_name().is_none()
    }
}

/// Partial update: only `Some` fields overwrite the stored values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ActorChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn john_doe() -> ActorModel {
        ActorModel::new(1, "John", "Doe", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn to_json_omits_unloaded_films() {
        let json = john_doe().to_json();
        assert_eq!(
            json,
            json!({"id": 1, "first_name": "John", "last_name": "Doe"})
        );
    }

    #[test]
    fn to_json_includes_loaded_films() {
        let mut actor = john_doe();
        actor.films = Some(vec![FilmModel {
            film_id: 7,
            title: "ACADEMY DINOSAUR".into(),
            description: None,
            release_year: Some(2006),
            last_update: actor.last_update,
        }]);

        let json = actor.to_json();
        assert_eq!(json["films"][0]["id"], 7);
        assert_eq!(json["films"][0]["title"], "ACADEMY DINOSAUR");
    }

    #[test]
    fn empty_names_are_not_part_of_the_filter() {
        let filter = ActorFilter {
            actor_id: None,
            first_name: Some(String::new()),
            last_name: Some(String::new()),
        };
        assert!(filter.is_empty());
        assert_eq!(filter.first_name(), None);
        assert_eq!(filter.last_name(), None);
    }

    #[test]
    fn by_id_filter_sets_only_the_id() {
        let filter = ActorFilter::by_id(1);
        assert!(!filter.is_empty());
        assert_eq!(filter.actor_id(), Some(1));
        assert_eq!(filter.first_name(), None);
    }

    #[test]
    fn changes_with_any_field_are_not_empty() {
        assert!(ActorChanges::default().is_empty());
        let changes = ActorChanges {
            first_name: None,
            last_name: Some("Smith".into()),
        };
        assert!(!changes.is_empty());
    }
}
