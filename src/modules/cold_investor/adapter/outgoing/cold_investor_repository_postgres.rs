use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{cold_investors, decision_maker_unlocks, decision_makers};
use crate::modules::cold_investor::application::domain::entities::{
    ColdInvestor, DecisionMaker, NewColdInvestor, NewDecisionMaker,
};
use crate::modules::cold_investor::application::ports::outgoing::{
    ColdInvestorRepository, ColdInvestorRepositoryError,
};
use crate::shared::db::is_foreign_key_violation;

#[derive(Clone, Debug)]
pub struct ColdInvestorRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ColdInvestorRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ColdInvestorRepositoryError {
    ColdInvestorRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ColdInvestorRepository for ColdInvestorRepositoryPostgres {
    async fn create_investor(
        &self,
        investor: NewColdInvestor,
    ) -> Result<ColdInvestor, ColdInvestorRepositoryError> {
        let row = cold_investors::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(investor.name),
            website: Set(investor.website),
            sectors: Set(json!(investor.sectors)),
            stages: Set(json!(investor.stages)),
            location: Set(investor.location),
            created_at: Set(Utc::now().into()),
        };

        let model = row.insert(&*self.db).await.map_err(map_db_err)?;
        ColdInvestor::try_from(model).map_err(ColdInvestorRepositoryError::DatabaseError)
    }

    async fn create_decision_maker(
        &self,
        cold_investor_id: Uuid,
        decision_maker: NewDecisionMaker,
    ) -> Result<DecisionMaker, ColdInvestorRepositoryError> {
        let row = decision_makers::ActiveModel {
            id: Set(Uuid::new_v4()),
            cold_investor_id: Set(cold_investor_id),
            name: Set(decision_maker.name),
            title: Set(decision_maker.title),
            email: Set(decision_maker.email),
            linkedin_url: Set(decision_maker.linkedin_url),
            created_at: Set(Utc::now().into()),
        };

        let model = row.insert(&*self.db).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                ColdInvestorRepositoryError::InvestorNotFound
            } else {
                map_db_err(e)
            }
        })?;

        Ok(model.into())
    }

    async fn record_unlock(
        &self,
        email: &str,
        decision_maker_id: Uuid,
        payment_id: &str,
    ) -> Result<(), ColdInvestorRepositoryError> {
        let row = decision_maker_unlocks::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            decision_maker_id: Set(decision_maker_id),
            payment_id: Set(payment_id.to_string()),
            created_at: Set(Utc::now().into()),
        };

        decision_maker_unlocks::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    decision_maker_unlocks::Column::Email,
                    decision_maker_unlocks::Column::DecisionMakerId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}
