use sakila_core::models::ActorModel;
use sakila_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `actor` table.
#[derive(Debug, Clone, FromRow)]
pub struct ActorEntity {
    pub actor_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub last_update: Timestamp,
}

impl ActorEntity {
    /// Relations are not part of the row; the model comes back with
    /// `films: None` and the datasource fills it in when asked.
    pub fn into_model(self) -> ActorModel {
        ActorModel::new(self.actor_id, self.first_name, self.last_name, self.last_update)
    }
}

impl From<&ActorModel> for ActorEntity {
    fn from(actor: &ActorModel) -> Self {
        Self {
            actor_id: actor.actor_id,
            first_name: actor.first_name.clone(),
            last_name: actor.last_name.clone(),
            last_update: actor.last_update,
        }
    }
}
