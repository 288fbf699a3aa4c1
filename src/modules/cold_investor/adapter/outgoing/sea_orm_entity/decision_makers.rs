use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::cold_investor::application::domain::entities::DecisionMaker;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "decision_makers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub cold_investor_id: Uuid,
    pub name: String,
    pub title: String,
    #[sea_orm(nullable)]
    pub email: Option<String>,
    #[sea_orm(nullable)]
    pub linkedin_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cold_investors::Entity",
        from = "Column::ColdInvestorId",
        to = "super::cold_investors::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ColdInvestors,
}

impl Related<super::cold_investors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ColdInvestors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for DecisionMaker {
    fn from(m: Model) -> Self {
        DecisionMaker {
            id: m.id,
            cold_investor_id: m.cold_investor_id,
            name: m.name,
            title: m.title,
            email: m.email,
            linkedin_url: m.linkedin_url,
            created_at: m.created_at.with_timezone(&chrono::Utc),
        }
    }
}
