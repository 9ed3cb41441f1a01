mod create_actor;
mod delete_actor;
mod get_actor;
mod get_actor_list;
mod update_actor;

use std::sync::Arc;

pub use create_actor::CreateActorUsecase;
pub use delete_actor::DeleteActorUsecase;
pub use get_actor::GetActorUsecase;
pub use get_actor_list::GetActorListUsecase;
pub use update_actor::UpdateActorUsecase;

use crate::clock::Clock;
use crate::repositories::ActorRepository;

/// Every actor use-case, wired against one repository and clock.
pub struct ActorUsecases {
    pub get: GetActorUsecase,
    pub get_list: GetActorListUsecase,
    pub create: CreateActorUsecase,
    pub update: UpdateActorUsecase,
    pub delete: DeleteActorUsecase,
}

impl ActorUsecases {
    pub fn new(actor_repository: Arc<dyn ActorRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            get: GetActorUsecase::new(Arc::clone(&actor_repository)),
            get_list: GetActorListUsecase::new(Arc::clone(&actor_repository)),
            create: CreateActorUsecase::new(Arc::clone(&actor_repository), Arc::clone(&clock)),
            update: UpdateActorUsecase::new(Arc::clone(&actor_repository), clock),
            delete: DeleteActorUsecase::new(actor_repository),
        }
    }
}
