use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::founders::{
    ActiveModel as FounderActiveModel, Column as FounderColumn, Entity as FounderEntity,
};
use crate::modules::founder::application::domain::entities::{FounderPatch, FounderProfile};
use crate::modules::founder::application::ports::outgoing::{
    FounderRepository, FounderRepositoryError,
};
use crate::shared::patch::PatchField;

#[derive(Clone, Debug)]
pub struct FounderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FounderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> FounderRepositoryError {
    FounderRepositoryError::DatabaseError(e.to_string())
}

fn set_trimmed(value: PatchField<String>) -> Option<String> {
    value.as_value().map(|v| v.trim().to_string())
}

fn set_nullable(value: PatchField<String>) -> Option<Option<String>> {
    match value {
        PatchField::Unset => None,
        PatchField::Null => Some(None),
        PatchField::Value(v) => Some(Some(v.trim().to_string())),
    }
}

#[async_trait]
impl FounderRepository for FounderRepositoryPostgres {
    async fn ensure_for_user(&self, user_id: Uuid) -> Result<FounderProfile, FounderRepositoryError> {
        let existing = FounderEntity::find()
            .filter(FounderColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        if let Some(model) = existing {
            return Ok(model.into());
        }

        let now = Utc::now();
        let row = FounderActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            company_name: Set(String::new()),
            project_name: Set(String::new()),
            tagline: Set(String::new()),
            pitch: Set(String::new()),
            website: Set(None),
            sector: Set(None),
            stage: Set(None),
            is_visible: Set(false),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        // A concurrent first visit may win the insert; either way one row remains.
        FounderEntity::insert(row)
            .on_conflict(
                OnConflict::column(FounderColumn::UserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        tracing::info!(user_id = %user_id, "Founder profile created");

        FounderEntity::find()
            .filter(FounderColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(FounderProfile::from)
            .ok_or(FounderRepositoryError::NotFound)
    }

    async fn apply_patch(
        &self,
        user_id: Uuid,
        patch: FounderPatch,
    ) -> Result<FounderProfile, FounderRepositoryError> {
        let model = FounderEntity::find()
            .filter(FounderColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(FounderRepositoryError::NotFound)?;

        let mut active = model.into_active_model();

        if let Some(v) = set_trimmed(patch.company_name) {
            active.company_name = Set(v);
        }
        if let Some(v) = set_trimmed(patch.project_name) {
            active.project_name = Set(v);
        }
        if let Some(v) = set_trimmed(patch.tagline) {
            active.tagline = Set(v);
        }
        if let Some(v) = set_trimmed(patch.pitch) {
            active.pitch = Set(v);
        }
        if let Some(v) = set_nullable(patch.website) {
            active.website = Set(v);
        }
        if let Some(v) = set_nullable(patch.sector) {
            active.sector = Set(v);
        }
        if let Some(v) = set_nullable(patch.stage) {
            active.stage = Set(v);
        }

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(updated.into())
    }

    async fn mark_visible(&self, founder_id: Uuid) -> Result<(), FounderRepositoryError> {
        let result = FounderEntity::update_many()
            .col_expr(FounderColumn::IsVisible, Expr::value(true))
            .col_expr(FounderColumn::UpdatedAt, Expr::value(Utc::now()))
            .filter(FounderColumn::Id.eq(founder_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(FounderRepositoryError::NotFound);
        }
        Ok(())
    }
}
