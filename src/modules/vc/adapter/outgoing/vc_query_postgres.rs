use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::vcs::{Column, Entity, Model};
use crate::modules::vc::application::domain::entities::{VcCard, VcFilter, VcListing};
use crate::modules::vc::application::ports::outgoing::{VcQuery, VcQueryError};
use crate::shared::db::escape_like;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone, Debug)]
pub struct VcQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VcQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Substring match on free text; wildcards typed by the user match literally.
fn search_pattern(search: &str) -> String {
    format!("%{}%", escape_like(search))
}

fn map_db_err(e: DbErr) -> VcQueryError {
    VcQueryError::DatabaseError(e.to_string())
}

fn to_listing(model: Model) -> Result<VcListing, VcQueryError> {
    VcListing::try_from(model).map_err(VcQueryError::CorruptRecord)
}

fn to_listings(models: Vec<Model>) -> Result<Vec<VcListing>, VcQueryError> {
    models.into_iter().map(to_listing).collect()
}

#[async_trait]
impl VcQuery for VcQueryPostgres {
    async fn find_by_id(&self, vc_id: Uuid) -> Result<Option<VcListing>, VcQueryError> {
        Entity::find_by_id(vc_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_listing)
            .transpose()
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<VcListing>, VcQueryError> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_listing)
            .transpose()
    }

    async fn list_public(
        &self,
        filter: VcFilter,
        page: &PageRequest,
    ) -> Result<PageResult<VcCard>, VcQueryError> {
        let mut query = Entity::find();

        if filter.verified_only {
            query = query.filter(Column::IsVerified.eq(true));
        }

        // Tags are stored lower-cased, so jsonb containment is an exact match.
        if let Some(sector) = filter.sector {
            query = query.filter(Expr::cust_with_values(
                "vcs.sectors @> $1",
                [json!([sector])],
            ));
        }
        if let Some(stage) = filter.stage {
            query = query.filter(Expr::cust_with_values(
                "vcs.stages @> $1",
                [json!([stage])],
            ));
        }

        if let Some(search) = filter.search {
            let pattern = search_pattern(&search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Name).ilike(&pattern))
                    .add(Expr::col(Column::FundName).ilike(&pattern))
                    .add(Expr::col(Column::Bio).ilike(&pattern)),
            );
        }

        let query = query
            .order_by_desc(Column::IsVerified)
            .order_by_desc(Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = to_listings(models)?
            .into_iter()
            .map(|listing| listing.card)
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn list_all(&self, page: &PageRequest) -> Result<PageResult<VcListing>, VcQueryError> {
        // Listings awaiting review surface first.
        let query = Entity::find()
            .order_by_desc(Expr::col(Column::PendingChanges).is_not_null())
            .order_by_desc(Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: to_listings(models)?,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<VcListing>, VcQueryError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let models = Entity::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_listings(models)
    }
}
