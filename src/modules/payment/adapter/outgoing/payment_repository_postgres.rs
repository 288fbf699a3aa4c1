use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::payments::{
    ActiveModel as PaymentActiveModel, Column as PaymentColumn, Entity as PaymentEntity,
    Model as PaymentModel,
};
use crate::modules::payment::application::domain::entities::{
    NewPayment, Payment, PaymentKind, PaymentStatus, PaymentTarget,
};
use crate::modules::payment::application::ports::outgoing::{
    PaymentRepository, PaymentRepositoryError,
};
use crate::modules::vc::application::ports::outgoing::{
    VcUnlockQuery, VcUnlockQueryError, VcUnlockRecord,
};
use crate::shared::db::is_unique_violation;

/// The payment ledger. Also answers which VCs a founder has unlocked.
#[derive(Clone, Debug)]
pub struct PaymentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PaymentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn transition(
        &self,
        payment_id: &str,
        to: PaymentStatus,
        intro_template: Option<String>,
    ) -> Result<bool, PaymentRepositoryError> {
        let mut update = PaymentEntity::update_many()
            .col_expr(PaymentColumn::Status, Expr::value(to.as_str()))
            .col_expr(
                PaymentColumn::UpdatedAt,
                Expr::value(chrono::DateTime::<chrono::FixedOffset>::from(Utc::now())),
            );
        if let Some(template) = intro_template {
            update = update.col_expr(PaymentColumn::IntroTemplate, Expr::value(template));
        }

        let result = update
            .filter(PaymentColumn::Id.eq(payment_id))
            .filter(PaymentColumn::Status.eq(PaymentStatus::Pending.as_str()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn completed_unlocks(&self, founder_id: Uuid) -> Result<Vec<PaymentModel>, DbErr> {
        PaymentEntity::find()
            .filter(PaymentColumn::FounderId.eq(founder_id))
            .filter(PaymentColumn::Kind.eq(PaymentKind::VcUnlock.as_str()))
            .filter(PaymentColumn::Status.eq(PaymentStatus::Completed.as_str()))
            .order_by_desc(PaymentColumn::UpdatedAt)
            .all(&*self.db)
            .await
    }
}

fn map_db_err(e: DbErr) -> PaymentRepositoryError {
    PaymentRepositoryError::DatabaseError(e.to_string())
}

fn to_payment(model: PaymentModel) -> Result<Payment, PaymentRepositoryError> {
    Payment::try_from(model).map_err(PaymentRepositoryError::CorruptRecord)
}

#[async_trait]
impl PaymentRepository for PaymentRepositoryPostgres {
    async fn insert(&self, payment: NewPayment) -> Result<Payment, PaymentRepositoryError> {
        let now = Utc::now();
        let row = PaymentActiveModel {
            id: Set(payment.id),
            founder_id: Set(payment.founder_id),
            vc_id: Set(payment.target.vc_id()),
            decision_maker_id: Set(payment.target.decision_maker_id()),
            kind: Set(payment.target.kind().as_str().to_string()),
            amount: Set(payment.amount),
            currency: Set(payment.currency),
            status: Set(PaymentStatus::Pending.as_str().to_string()),
            intro_template: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let model = row.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                PaymentRepositoryError::AlreadyExists
            } else {
                map_db_err(e)
            }
        })?;

        to_payment(model)
    }

    async fn find_by_id(&self, payment_id: &str) -> Result<Option<Payment>, PaymentRepositoryError> {
        PaymentEntity::find_by_id(payment_id.to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_payment)
            .transpose()
    }

    async fn find_pending(
        &self,
        founder_id: Uuid,
        target: &PaymentTarget,
    ) -> Result<Option<Payment>, PaymentRepositoryError> {
        let query = PaymentEntity::find()
            .filter(PaymentColumn::FounderId.eq(founder_id))
            .filter(PaymentColumn::Kind.eq(target.kind().as_str()))
            .filter(PaymentColumn::Status.eq(PaymentStatus::Pending.as_str()));

        let query = match target.vc_id() {
            Some(vc_id) => query.filter(PaymentColumn::VcId.eq(vc_id)),
            None => query.filter(PaymentColumn::VcId.is_null()),
        };
        let query = match target.decision_maker_id() {
            Some(id) => query.filter(PaymentColumn::DecisionMakerId.eq(id)),
            None => query.filter(PaymentColumn::DecisionMakerId.is_null()),
        };

        query
            .order_by_desc(PaymentColumn::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_payment)
            .transpose()
    }

    async fn mark_completed(
        &self,
        payment_id: &str,
        intro_template: Option<String>,
    ) -> Result<bool, PaymentRepositoryError> {
        self.transition(payment_id, PaymentStatus::Completed, intro_template)
            .await
    }

    async fn mark_failed(&self, payment_id: &str) -> Result<bool, PaymentRepositoryError> {
        self.transition(payment_id, PaymentStatus::Failed, None).await
    }

    async fn list_for_founder(&self, founder_id: Uuid) -> Result<Vec<Payment>, PaymentRepositoryError> {
        PaymentEntity::find()
            .filter(PaymentColumn::FounderId.eq(founder_id))
            .order_by_desc(PaymentColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_payment)
            .collect()
    }
}

#[async_trait]
impl VcUnlockQuery for PaymentRepositoryPostgres {
    async fn has_unlocked(&self, founder_id: Uuid, vc_id: Uuid) -> Result<bool, VcUnlockQueryError> {
        let found = PaymentEntity::find()
            .filter(PaymentColumn::FounderId.eq(founder_id))
            .filter(PaymentColumn::VcId.eq(vc_id))
            .filter(PaymentColumn::Kind.eq(PaymentKind::VcUnlock.as_str()))
            .filter(PaymentColumn::Status.eq(PaymentStatus::Completed.as_str()))
            .one(&*self.db)
            .await
            .map_err(|e| VcUnlockQueryError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    async fn unlocked_vcs(&self, founder_id: Uuid) -> Result<Vec<VcUnlockRecord>, VcUnlockQueryError> {
        let rows = self
            .completed_unlocks(founder_id)
            .await
            .map_err(|e| VcUnlockQueryError::DatabaseError(e.to_string()))?;

        let mut seen = HashSet::new();
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let vc_id = row.vc_id?;
                seen.insert(vc_id).then(|| VcUnlockRecord {
                    vc_id,
                    intro_template: row.intro_template,
                    unlocked_at: row.updated_at.with_timezone(&Utc),
                })
            })
            .collect())
    }
}
