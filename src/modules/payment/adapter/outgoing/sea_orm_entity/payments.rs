use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::payment::application::domain::entities::Payment;

/// Keyed by the processor's intent id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub founder_id: Uuid,
    #[sea_orm(nullable)]
    pub vc_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub decision_maker_id: Option<Uuid>,
    pub kind: String,
    pub amount: i32,
    pub currency: String,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub intro_template: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::founder::adapter::outgoing::sea_orm_entity::founders::Entity",
        from = "Column::FounderId",
        to = "crate::modules::founder::adapter::outgoing::sea_orm_entity::founders::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Founders,
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Payment {
    type Error = String;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(Payment {
            kind: m
                .kind
                .parse()
                .map_err(|e| format!("payment {}: {}", m.id, e))?,
            status: m
                .status
                .parse()
                .map_err(|e| format!("payment {}: {}", m.id, e))?,
            id: m.id,
            founder_id: m.founder_id,
            vc_id: m.vc_id,
            decision_maker_id: m.decision_maker_id,
            amount: m.amount,
            currency: m.currency,
            intro_template: m.intro_template,
            created_at: m.created_at.with_timezone(&chrono::Utc),
            updated_at: m.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
