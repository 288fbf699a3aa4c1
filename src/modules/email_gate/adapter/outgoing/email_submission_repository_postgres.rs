use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::email_submissions::{
    ActiveModel as SubmissionActiveModel, Column as SubmissionColumn, Entity as SubmissionEntity,
};
use crate::modules::email_gate::application::ports::outgoing::{
    EmailSubmissionRepository, EmailSubmissionRepositoryError,
};

#[derive(Clone, Debug)]
pub struct EmailSubmissionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EmailSubmissionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> EmailSubmissionRepositoryError {
    EmailSubmissionRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl EmailSubmissionRepository for EmailSubmissionRepositoryPostgres {
    async fn record(&self, email: &str, source: &str) -> Result<(), EmailSubmissionRepositoryError> {
        let row = SubmissionActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            source: Set(source.to_string()),
            created_at: Set(Utc::now().into()),
        };

        SubmissionEntity::insert(row)
            .on_conflict(
                OnConflict::columns([SubmissionColumn::Email, SubmissionColumn::Source])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn exists(&self, email: &str, source: &str) -> Result<bool, EmailSubmissionRepositoryError> {
        let found = SubmissionEntity::find()
            .filter(SubmissionColumn::Email.eq(email))
            .filter(SubmissionColumn::Source.eq(source))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }
}
