use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::project_votes::{
    ActiveModel as VoteActiveModel, Column as VoteColumn, Entity as VoteEntity,
};
use crate::modules::vote::application::ports::outgoing::{VoteRepository, VoteRepositoryError};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct VoteRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VoteRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> VoteRepositoryError {
    VoteRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl VoteRepository for VoteRepositoryPostgres {
    async fn insert_vote(&self, founder_id: Uuid, email: &str) -> Result<(), VoteRepositoryError> {
        let now = Utc::now();
        let row = VoteActiveModel {
            id: Set(Uuid::new_v4()),
            founder_id: Set(founder_id),
            email: Set(email.to_string()),
            vote_date: Set(now.date_naive()),
            created_at: Set(now.into()),
        };

        VoteEntity::insert(row)
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    VoteRepositoryError::AlreadyVoted
                } else {
                    map_db_err(e)
                }
            })?;

        Ok(())
    }

    async fn delete_vote(&self, founder_id: Uuid, email: &str) -> Result<bool, VoteRepositoryError> {
        let result = VoteEntity::delete_many()
            .filter(VoteColumn::FounderId.eq(founder_id))
            .filter(VoteColumn::Email.eq(email))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn has_voted(&self, founder_id: Uuid, email: &str) -> Result<bool, VoteRepositoryError> {
        let found = VoteEntity::find()
            .filter(VoteColumn::FounderId.eq(founder_id))
            .filter(VoteColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }

    async fn last_vote_at(&self, email: &str) -> Result<Option<DateTime<Utc>>, VoteRepositoryError> {
        let latest = VoteEntity::find()
            .filter(VoteColumn::Email.eq(email))
            .order_by_desc(VoteColumn::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(latest.map(|m| m.created_at.with_timezone(&Utc)))
    }

    async fn count_for(&self, founder_id: Uuid) -> Result<u64, VoteRepositoryError> {
        VoteEntity::find()
            .filter(VoteColumn::FounderId.eq(founder_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}
