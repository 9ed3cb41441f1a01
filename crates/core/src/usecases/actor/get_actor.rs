use std::sync::Arc;

use crate::error::StorageError;
use crate::models::{ActorFilter, ActorModel, ActorRelation};
use crate::repositories::ActorRepository;

/// Resolves a single actor. Absence is `Ok(None)`, not an error.
pub struct GetActorUsecase {
    actor_repository: Arc<dyn ActorRepository>,
}

impl GetActorUsecase {
    pub fn new(actor_repository: Arc<dyn ActorRepository>) -> Self {
        Self { actor_repository }
    }

    pub async fn execute(
        &self,
        filter: &ActorFilter,
        relations: &[ActorRelation],
    ) -> Result<Option<ActorModel>, StorageError> {
        self.actor_repository.get(filter, relations).await
    }
}
