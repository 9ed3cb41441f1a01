use std::sync::Arc;

use crate::error::StorageError;
use crate::models::ActorModel;
use crate::repositories::ActorRepository;

/// Removes an already-fetched actor and its film links.
pub struct DeleteActorUsecase {
    actor_repository: Arc<dyn ActorRepository>,
}

impl DeleteActorUsecase {
    pub fn new(actor_repository: Arc<dyn ActorRepository>) -> Self {
        Self { actor_repository }
    }

    pub async fn execute(&self, actor: &ActorModel) -> Result<bool, StorageError> {
        let deleted = self.actor_repository.delete(actor).await?;
        if deleted {
            tracing::info!(actor_id = actor.actor_id, "Actor deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockActorRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn reports_whether_a_row_was_removed() {
        let mut repo = MockActorRepository::new();
        repo.expect_delete()
            .withf(|actor| actor.actor_id == 4)
            .times(1)
            .returning(|_| Ok(false));

        let usecase = DeleteActorUsecase::new(Arc::new(repo));
        let actor = ActorModel::new(4, "Jennifer", "Davis", Utc::now());

        assert!(!usecase.execute(&actor).await.unwrap());
    }
}
