use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserProfile, UserRole};
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError,
};

use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_profile(model: UserModel) -> Result<UserProfile, UserRepositoryError> {
        let role = model
            .role
            .parse::<UserRole>()
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(UserProfile {
            id: model.id,
            email: model.email,
            full_name: model.full_name,
            role,
            is_admin: model.is_admin,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        })
    }

    async fn find_model(&self, user_id: Uuid) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<UserProfile, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(user.email.to_lowercase()),
            password_hash: Set(user.password_hash),
            full_name: Set(user.full_name),
            role: Set(user.role.as_str().to_string()),
            is_admin: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            map_db_err(e)
        })?;

        Self::map_to_profile(inserted)
    }

    async fn set_full_name(
        &self,
        user_id: Uuid,
        full_name: String,
    ) -> Result<UserProfile, UserRepositoryError> {
        let user = self.find_model(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        active_user.full_name = Set(full_name);

        let updated = active_user.update(&*self.db).await.map_err(map_db_err)?;

        Self::map_to_profile(updated)
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let user = self.find_model(user_id).await?;

        user.delete(&*self.db).await.map_err(map_db_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_data() -> CreateUserData {
        CreateUserData {
            email: "Nora@Startup.io".to_string(),
            password_hash: "hashed".to_string(),
            full_name: "Nora Builder".to_string(),
            role: UserRole::Founder,
        }
    }

    fn model(id: Uuid, full_name: &str) -> UserModel {
        let now = Utc::now();
        UserModel {
            id,
            email: "nora@startup.io".to_string(),
            password_hash: "hashed".to_string(),
            full_name: full_name.to_string(),
            role: "founder".to_string(),
            is_admin: false,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(Uuid::new_v4(), "Nora Builder")]])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));
        let created = repository.create_user(create_data()).await.unwrap();

        assert_eq!(created.email, "nora@startup.io");
        assert_eq!(created.role, UserRole::Founder);
        assert!(!created.is_admin);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_key_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint".to_string(),
            )])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));
        let err = repository.create_user(create_data()).await.unwrap_err();

        assert!(matches!(err, UserRepositoryError::UserAlreadyExists));
    }

    #[tokio::test]
    async fn test_set_full_name_success() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(id, "Old")]])
            .append_query_results(vec![vec![model(id, "New Name")]])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));
        let updated = repository
            .set_full_name(id, "New Name".to_string())
            .await
            .unwrap();

        assert_eq!(updated.full_name, "New Name");
    }

    #[tokio::test]
    async fn test_set_full_name_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));
        let err = repository
            .set_full_name(Uuid::new_v4(), "x".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, UserRepositoryError::UserNotFound));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(id, "Nora")]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));
        assert!(repository.delete_user(id).await.is_ok());
    }
}
