use std::sync::Arc;

use crate::clock::Clock;
use crate::error::StorageError;
use crate::models::{ActorChanges, ActorModel};
use crate::repositories::ActorRepository;

/// Applies a partial update to an already-fetched actor.
pub struct UpdateActorUsecase {
    actor_repository: Arc<dyn ActorRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateActorUsecase {
    pub fn new(actor_repository: Arc<dyn ActorRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            actor_repository,
            clock,
        }
    }

    /// Returns whether anything was written. Empty `changes` never reach
    /// storage.
    pub async fn execute(
        &self,
        actor: &ActorModel,
        changes: &ActorChanges,
    ) -> Result<bool, StorageError> {
        if changes.is_empty() {
            return Ok(false);
        }
        let updated = self
            .actor_repository
            .update(actor, changes, self.clock.now())
            .await?;
        if updated {
            tracing::debug!(actor_id = actor.actor_id, "Actor updated");
        }
        Ok(updated)
    }
}
