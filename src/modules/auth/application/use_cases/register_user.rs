use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::{error, info};

use crate::auth::application::domain::entities::{UserProfile, UserRole};
use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserRepository, UserRepositoryError,
};
use crate::auth::application::services::BasicPasswordPolicy;

// ========================= Register Request =========================
/// Validated signup payload
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    email: String,
    password: String,
    full_name: String,
    role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    WeakPassword(PasswordPolicyError),
    InvalidFullName,
    InvalidRole(String),
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            RegisterRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            RegisterRequestError::WeakPassword(e) => write!(f, "{}", e),
            RegisterRequestError::InvalidFullName => {
                write!(f, "Full name must be between 1 and 100 characters")
            }
            RegisterRequestError::InvalidRole(role) => {
                write!(f, "Role must be founder, vc or angel (got '{}')", role)
            }
        }
    }
}

impl std::error::Error for RegisterRequestError {}

impl RegisterUserRequest {
    pub fn new(
        email: String,
        password: String,
        full_name: String,
        role: &str,
    ) -> Result<Self, RegisterRequestError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        BasicPasswordPolicy
            .validate(&password)
            .map_err(RegisterRequestError::WeakPassword)?;

        let full_name = full_name.trim();
        if full_name.is_empty() || full_name.chars().count() > 100 {
            return Err(RegisterRequestError::InvalidFullName);
        }

        let role = role
            .parse::<UserRole>()
            .map_err(|e| RegisterRequestError::InvalidRole(e.0))?;

        Ok(Self {
            email: email.to_lowercase(),
            password,
            full_name: full_name.to_string(),
            role,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}

// ====================== Register Error =============================
#[derive(Debug, Clone)]
pub enum RegisterUserError {
    EmailAlreadyExists,
    HashingFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterUserError::EmailAlreadyExists => write!(f, "Email already registered"),
            RegisterUserError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            RegisterUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterUserError {}

// ============================ Register Use Case =============================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterUserRequest)
        -> Result<UserProfile, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> Result<UserProfile, RegisterUserError> {
        let password_hash = self
            .password_hasher
            .hash_password(&request.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let created = self
            .repository
            .create_user(CreateUserData {
                email: request.email,
                password_hash,
                full_name: request.full_name,
                role: request.role,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => {
                    error!("Failed to create user: {}", other);
                    RegisterUserError::RepositoryError(other.to_string())
                }
            })?;

        info!(user_id = %created.id, role = %created.role, "User registered");
        Ok(created)
    }
}
