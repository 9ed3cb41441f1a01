use std::sync::Arc;

use crate::models::ActorModel;
use crate::repositories::ActorRepository;

/// Lists every actor.
pub struct GetActorListUsecase {
    actor_repository: Arc<dyn ActorRepository>,
}

impl GetActorListUsecase {
    pub fn new(actor_repository: Arc<dyn ActorRepository>) -> Self {
        Self { actor_repository }
    }

    /// Returns `None` when the repository fails; the failure is logged and
    /// the caller reports the list as unavailable. An empty table is
    /// `Some(vec![])`.
    pub async fn execute(&self) -> Option<Vec<ActorModel>> {
        match self.actor_repository.get_list().await {
            Ok(actors) => Some(actors),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load actor list");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::repositories::MockActorRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn empty_store_yields_empty_list() {
        let mut repo = MockActorRepository::new();
        repo.expect_get_list().returning(|| Ok(vec![]));

        let usecase = GetActorListUsecase::new(Arc::new(repo));

        assert_eq!(usecase.execute().await, Some(vec![]));
    }

    #[tokio::test]
    async fn returns_all_actors() {
        let now = Utc::now();
        let actors = vec![
            ActorModel::new(1, "John", "Doe", now),
            ActorModel::new(2, "Jane", "Doe", now),
        ];
        let returned = actors.clone();

        let mut repo = MockActorRepository::new();
        repo.expect_get_list()
            .returning(move || Ok(returned.clone()));

        let usecase = GetActorListUsecase::new(Arc::new(repo));

        assert_eq!(usecase.execute().await, Some(actors));
    }

    #[tokio::test]
    async fn storage_failure_yields_none() {
        let mut repo = MockActorRepository::new();
        repo.expect_get_list()
            .returning(|| Err(StorageError::database("get_list", "connection reset")));

        let usecase = GetActorListUsecase::new(Arc::new(repo));

        assert!(usecase.execute().await.is_none());
    }
}
