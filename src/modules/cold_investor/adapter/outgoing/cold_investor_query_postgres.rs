use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{cold_investors, decision_maker_unlocks, decision_makers};
use crate::modules::cold_investor::application::domain::entities::{
    ColdInvestor, ColdInvestorRecord, DecisionMaker,
};
use crate::modules::cold_investor::application::ports::outgoing::{
    ColdInvestorQuery, ColdInvestorQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone, Debug)]
pub struct ColdInvestorQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ColdInvestorQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ColdInvestorQueryError {
    ColdInvestorQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ColdInvestorQuery for ColdInvestorQueryPostgres {
    async fn list_investors(
        &self,
        page: &PageRequest,
    ) -> Result<PageResult<ColdInvestorRecord>, ColdInvestorQueryError> {
        let query = cold_investors::Entity::find().order_by_asc(cold_investors::Column::Name);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let investors = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if investors.is_empty() {
            return Ok(PageResult { total, ..PageResult::empty(page) });
        }

        let ids: Vec<Uuid> = investors.iter().map(|m| m.id).collect();
        let people = decision_makers::Entity::find()
            .filter(decision_makers::Column::ColdInvestorId.is_in(ids))
            .order_by_asc(decision_makers::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut by_investor: HashMap<Uuid, Vec<DecisionMaker>> = HashMap::new();
        for person in people {
            by_investor
                .entry(person.cold_investor_id)
                .or_default()
                .push(person.into());
        }

        let items = investors
            .into_iter()
            .map(|model| {
                let decision_makers = by_investor.remove(&model.id).unwrap_or_default();
                ColdInvestor::try_from(model)
                    .map(|investor| ColdInvestorRecord {
                        investor,
                        decision_makers,
                    })
                    .map_err(ColdInvestorQueryError::CorruptRecord)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn find_decision_maker(
        &self,
        decision_maker_id: Uuid,
    ) -> Result<Option<DecisionMaker>, ColdInvestorQueryError> {
        let found = decision_makers::Entity::find_by_id(decision_maker_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(DecisionMaker::from))
    }

    async fn unlocked_decision_maker_ids(
        &self,
        email: &str,
    ) -> Result<Vec<Uuid>, ColdInvestorQueryError> {
        let unlocks = decision_maker_unlocks::Entity::find()
            .filter(decision_maker_unlocks::Column::Email.eq(email))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(unlocks.into_iter().map(|u| u.decision_maker_id).collect())
    }

    async fn is_unlocked(
        &self,
        email: &str,
        decision_maker_id: Uuid,
    ) -> Result<bool, ColdInvestorQueryError> {
        let found = decision_maker_unlocks::Entity::find()
            .filter(decision_maker_unlocks::Column::Email.eq(email))
            .filter(decision_maker_unlocks::Column::DecisionMakerId.eq(decision_maker_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }
}
