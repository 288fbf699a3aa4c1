use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Clone, Debug)]
pub struct UpdateUserInput {
    pub user_id: UserId,
    pub full_name: String,
}

#[derive(Debug, thiserror::Error, Clone)]
pub enum UpdateUserError {
    #[error("Invalid full name: {0}")]
    InvalidFullName(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserProfileUseCase: Send + Sync {
    async fn execute(&self, data: UpdateUserInput) -> Result<UserProfile, UpdateUserError>;
}

#[derive(Clone)]
pub struct UpdateUserProfileService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateUserProfileService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateUserProfileUseCase for UpdateUserProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, data: UpdateUserInput) -> Result<UserProfile, UpdateUserError> {
        let full_name = data.full_name.trim();
        if full_name.is_empty() {
            return Err(UpdateUserError::InvalidFullName(
                "Full name cannot be empty".to_string(),
            ));
        }
        if full_name.chars().count() > 100 {
            return Err(UpdateUserError::InvalidFullName(
                "Full name must be at most 100 characters".to_string(),
            ));
        }

        self.repository
            .set_full_name(data.user_id.value(), full_name.to_string())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
                other => UpdateUserError::RepositoryError(other.to_string()),
            })
    }
}
