use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::vcs::{
    ActiveModel as VcActiveModel, Column as VcColumn, Entity as VcEntity, Model as VcModel,
};
use crate::modules::vc::application::domain::entities::{NewVc, VcChanges, VcListing};
use crate::modules::vc::application::ports::outgoing::{VcRepository, VcRepositoryError};
use crate::shared::db::is_unique_violation;
use crate::shared::patch::PatchField;

#[derive(Clone, Debug)]
pub struct VcRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VcRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(&self, vc_id: Uuid) -> Result<VcModel, VcRepositoryError> {
        VcEntity::find_by_id(vc_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(VcRepositoryError::NotFound)
    }

    /// Locks the row, applies or drops the stored patch, then clears `pending_changes`.
    async fn resolve_pending(
        &self,
        vc_id: Uuid,
        apply: bool,
    ) -> Result<VcListing, VcRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = VcEntity::find_by_id(vc_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(VcRepositoryError::NotFound)?;

        let Some(stored) = model.pending_changes.clone() else {
            return Err(VcRepositoryError::NoPendingChanges);
        };

        let mut active = model.into_active_model();
        if apply {
            let changes: VcChanges = serde_json::from_value(stored)
                .map_err(|e| VcRepositoryError::SerializationError(e.to_string()))?;
            apply_changes(&mut active, changes);
        }
        active.pending_changes = Set(None);

        let updated = active.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        to_listing(updated)
    }
}

fn map_db_err(e: DbErr) -> VcRepositoryError {
    VcRepositoryError::DatabaseError(e.to_string())
}

fn to_listing(model: VcModel) -> Result<VcListing, VcRepositoryError> {
    VcListing::try_from(model).map_err(VcRepositoryError::SerializationError)
}

fn trimmed(v: String) -> String {
    v.trim().to_string()
}

fn nullable(field: PatchField<String>) -> Option<Option<String>> {
    match field {
        PatchField::Unset => None,
        PatchField::Null => Some(None),
        PatchField::Value(v) => Some(Some(trimmed(v))),
    }
}

fn apply_changes(active: &mut VcActiveModel, changes: VcChanges) {
    if let PatchField::Value(v) = changes.name {
        active.name = Set(trimmed(v));
    }
    if let PatchField::Value(v) = changes.fund_name {
        active.fund_name = Set(trimmed(v));
    }
    if let PatchField::Value(v) = changes.title {
        active.title = Set(trimmed(v));
    }
    if let PatchField::Value(v) = changes.bio {
        active.bio = Set(trimmed(v));
    }
    if let PatchField::Value(v) = changes.sectors {
        active.sectors = Set(serde_json::Value::from(v));
    }
    if let PatchField::Value(v) = changes.stages {
        active.stages = Set(serde_json::Value::from(v));
    }
    if let Some(v) = nullable(changes.check_size) {
        active.check_size = Set(v);
    }
    if let Some(v) = nullable(changes.location) {
        active.location = Set(v);
    }
    if let Some(v) = nullable(changes.website) {
        active.website = Set(v);
    }
    if let PatchField::Value(v) = changes.price {
        active.price = Set(v);
    }
    match changes.intro_price {
        PatchField::Unset => {}
        PatchField::Null => active.intro_price = Set(None),
        PatchField::Value(v) => active.intro_price = Set(Some(v)),
    }
    if let PatchField::Value(v) = changes.contact_method {
        active.contact_method = Set(v.as_str().to_string());
    }
    if let PatchField::Value(v) = changes.contact_value {
        active.contact_value = Set(trimmed(v));
    }
    if let Some(v) = nullable(changes.linkedin_url) {
        active.linkedin_url = Set(v);
    }
}

#[async_trait]
impl VcRepository for VcRepositoryPostgres {
    async fn create_vc(&self, user_id: Uuid, data: NewVc) -> Result<VcListing, VcRepositoryError> {
        let row = VcActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            name: Set(trimmed(data.name)),
            fund_name: Set(trimmed(data.fund_name)),
            title: Set(trimmed(data.title)),
            bio: Set(trimmed(data.bio)),
            sectors: Set(serde_json::Value::from(data.sectors)),
            stages: Set(serde_json::Value::from(data.stages)),
            check_size: Set(data.check_size.map(trimmed)),
            location: Set(data.location.map(trimmed)),
            website: Set(data.website.map(trimmed)),
            price: Set(data.price),
            intro_price: Set(data.intro_price),
            contact_method: Set(data.contact_method.as_str().to_string()),
            contact_value: Set(trimmed(data.contact_value)),
            linkedin_url: Set(data.linkedin_url.map(trimmed)),
            is_verified: Set(false),
            pending_changes: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = row.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return VcRepositoryError::AlreadyExists;
            }
            map_db_err(e)
        })?;

        to_listing(inserted)
    }

    async fn store_pending_changes(
        &self,
        user_id: Uuid,
        changes: VcChanges,
    ) -> Result<VcListing, VcRepositoryError> {
        let model = VcEntity::find()
            .filter(VcColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(VcRepositoryError::NotFound)?;

        let stored = serde_json::to_value(&changes)
            .map_err(|e| VcRepositoryError::SerializationError(e.to_string()))?;

        let mut active = model.into_active_model();
        active.pending_changes = Set(Some(stored));

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        to_listing(updated)
    }

    async fn set_verified(&self, vc_id: Uuid, is_verified: bool) -> Result<VcListing, VcRepositoryError> {
        let mut active = self.find_model(vc_id).await?.into_active_model();
        active.is_verified = Set(is_verified);

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        to_listing(updated)
    }

    async fn apply_pending_changes(&self, vc_id: Uuid) -> Result<VcListing, VcRepositoryError> {
        self.resolve_pending(vc_id, true).await
    }

    async fn discard_pending_changes(&self, vc_id: Uuid) -> Result<VcListing, VcRepositoryError> {
        self.resolve_pending(vc_id, false).await
    }
}
