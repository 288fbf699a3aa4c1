use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryFilter,
    QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::vc_requests::{
    ActiveModel as RequestActiveModel, Column as RequestColumn, Entity as RequestEntity,
};
use crate::modules::vc_request::application::domain::entities::{VcRequestKind, VcRequestStats};
use crate::modules::vc_request::application::ports::outgoing::{
    VcRequestRepository, VcRequestRepositoryError,
};

#[derive(Clone, Debug)]
pub struct VcRequestRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VcRequestRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct KindCountRow {
    kind: String,
    total: i64,
}

fn map_db_err(e: DbErr) -> VcRequestRepositoryError {
    VcRequestRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl VcRequestRepository for VcRequestRepositoryPostgres {
    async fn record(
        &self,
        founder_id: Uuid,
        vc_id: Uuid,
        kind: VcRequestKind,
    ) -> Result<(), VcRequestRepositoryError> {
        let row = RequestActiveModel {
            id: Set(Uuid::new_v4()),
            founder_id: Set(founder_id),
            vc_id: Set(vc_id),
            kind: Set(kind.as_str().to_string()),
            created_at: Set(Utc::now().into()),
        };

        RequestEntity::insert(row)
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn stats_for_vc(&self, vc_id: Uuid) -> Result<VcRequestStats, VcRequestRepositoryError> {
        let rows = RequestEntity::find()
            .select_only()
            .column(RequestColumn::Kind)
            .column_as(Expr::col(RequestColumn::Id).count(), "total")
            .filter(RequestColumn::VcId.eq(vc_id))
            .group_by(RequestColumn::Kind)
            .into_model::<KindCountRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut stats = VcRequestStats::empty(vc_id);
        for row in rows {
            match row.kind.parse::<VcRequestKind>() {
                Ok(kind) => stats.add(kind, row.total.max(0) as u64),
                Err(e) => tracing::warn!(vc_id = %vc_id, "Skipping request row: {}", e),
            }
        }
        Ok(stats)
    }
}
