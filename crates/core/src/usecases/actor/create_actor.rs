use std::sync::Arc;

use crate::clock::Clock;
use crate::error::StorageError;
use crate::models::ActorModel;
use crate::repositories::ActorRepository;

/// Creates an actor with the next free id.
///
/// The id is `max(actor_id) + 1`, read and inserted in two separate storage
/// calls without a transaction. Two concurrent creates can pick the same id;
/// the loser's insert fails on the primary key and comes back as
/// [`StorageError::Conflict`].
pub struct CreateActorUsecase {
    actor_repository: Arc<dyn ActorRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateActorUsecase {
    pub fn new(actor_repository: Arc<dyn ActorRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            actor_repository,
            clock,
        }
    }

    pub async fn execute(
        &self,
        first_name: String,
        last_name: String,
    ) -> Result<ActorModel, StorageError> {
        let now = self.clock.now();
        let max_actor_id = self.actor_repository.get_max_id().await?;
        let actor_id = max_actor_id
            .checked_add(1)
            .ok_or_else(|| StorageError::conflict("create_actor", "actor id space exhausted"))?;

        let actor = ActorModel::new(actor_id, first_name, last_name, now);
        self.actor_repository.create(&actor).await?;

        tracing::info!(actor_id, "Actor created");
        Ok(actor)
    }
}
