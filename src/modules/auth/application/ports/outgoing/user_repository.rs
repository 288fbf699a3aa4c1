use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserProfile, UserRole};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserProfile, UserRepositoryError>;

    async fn set_full_name(
        &self,
        user_id: Uuid,
        full_name: String,
    ) -> Result<UserProfile, UserRepositoryError>;

    /// Hard delete. Owned rows go with it through ON DELETE CASCADE.
    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
