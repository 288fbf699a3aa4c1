use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::founders::{
    Column as FounderColumn, Entity as FounderEntity, Model as FounderModel,
};
use crate::modules::founder::application::domain::entities::{
    FounderProfile, ScoutProject, ScoutSort,
};
use crate::modules::founder::application::ports::outgoing::{FounderQuery, FounderQueryError};
use crate::modules::vote::adapter::outgoing::sea_orm_entity::project_votes::{
    Column as VoteColumn, Entity as VoteEntity,
};
use crate::shared::pagination::{PageRequest, PageResult};

const VOTE_COUNT_SQL: &str =
    "(SELECT COUNT(*) FROM project_votes pv WHERE pv.founder_id = founders.id)";

#[derive(Debug, FromQueryResult)]
struct VoteCountRow {
    founder_id: Uuid,
    vote_count: i64,
}

#[derive(Clone, Debug)]
pub struct FounderQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FounderQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn vote_counts(&self, ids: Vec<Uuid>) -> Result<HashMap<Uuid, u64>, FounderQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = VoteEntity::find()
            .select_only()
            .column(VoteColumn::FounderId)
            .column_as(Expr::col(VoteColumn::Id).count(), "vote_count")
            .filter(VoteColumn::FounderId.is_in(ids))
            .group_by(VoteColumn::FounderId)
            .into_model::<VoteCountRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|r| (r.founder_id, r.vote_count.max(0) as u64))
            .collect())
    }

    async fn with_counts(
        &self,
        models: Vec<FounderModel>,
    ) -> Result<Vec<ScoutProject>, FounderQueryError> {
        let counts = self
            .vote_counts(models.iter().map(|m| m.id).collect())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let votes = counts.get(&m.id).copied().unwrap_or(0);
                ScoutProject::from_profile(m.into(), votes)
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> FounderQueryError {
    FounderQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl FounderQuery for FounderQueryPostgres {
    async fn find_by_id(&self, founder_id: Uuid) -> Result<Option<FounderProfile>, FounderQueryError> {
        let model = FounderEntity::find_by_id(founder_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(FounderProfile::from))
    }

    async fn list_visible(
        &self,
        sort: ScoutSort,
        page: &PageRequest,
    ) -> Result<PageResult<ScoutProject>, FounderQueryError> {
        let base = FounderEntity::find().filter(FounderColumn::IsVisible.eq(true));

        let total = base.clone().count(&*self.db).await.map_err(map_db_err)?;
        if total == 0 {
            return Ok(PageResult::empty(page));
        }

        let ordered = match sort {
            ScoutSort::Votes => base
                .order_by(Expr::cust(VOTE_COUNT_SQL), Order::Desc)
                .order_by_desc(FounderColumn::CreatedAt),
            ScoutSort::Newest => base.order_by_desc(FounderColumn::CreatedAt),
        };

        let models = ordered
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: self.with_counts(models).await?,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn find_visible(&self, founder_id: Uuid) -> Result<Option<ScoutProject>, FounderQueryError> {
        let model = FounderEntity::find_by_id(founder_id)
            .filter(FounderColumn::IsVisible.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match model {
            Some(m) => Ok(self.with_counts(vec![m]).await?.into_iter().next()),
            None => Ok(None),
        }
    }
}
