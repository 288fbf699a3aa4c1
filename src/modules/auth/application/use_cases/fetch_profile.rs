use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

#[async_trait]
pub trait FetchUserProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchUserError>;
}

#[derive(Clone)]
pub struct FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchUserProfileUseCase for FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchUserError> {
        self.query
            .find_by_id(user_id)
            .await?
            .map(UserProfile::from)
            .ok_or(FetchUserError::UserNotFound)
    }
}
