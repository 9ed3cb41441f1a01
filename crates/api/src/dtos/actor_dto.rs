use sakila_core::models::ActorChanges;
use serde::Deserialize;
use validator::Validate;

/// Body of `POST /api/actor/v1/me/`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActorDto {
    #[validate(length(
        min = 1,
        max = 45,
        message = "First name must be between 1 and 45 characters long."
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 45,
        message = "Last name must be between 1 and 45 characters long."
    ))]
    pub last_name: String,
}

/// Body of `PUT /api/actor/v1/me/id/{actor_id}`. Omitted fields are left
/// unchanged; present ones follow the same rules as on create.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateActorDto {
    #[validate(length(
        min = 1,
        max = 45,
        message = "First name must be between 1 and 45 characters long."
    ))]
    pub first_name: Option<String>,

    #[validate(length(
        min = 1,
        max = 45,
        message = "Last name must be between 1 and 45 characters long."
    ))]
    pub last_name: Option<String>,
}

impl From<UpdateActorDto> for ActorChanges {
    fn from(dto: UpdateActorDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}
