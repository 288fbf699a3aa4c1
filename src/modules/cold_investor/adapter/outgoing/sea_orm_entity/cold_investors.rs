use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::cold_investor::application::domain::entities::ColdInvestor;
use crate::modules::vc::adapter::outgoing::sea_orm_entity::vcs::tags_from_json;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cold_investors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(nullable)]
    pub website: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub sectors: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub stages: Json,
    #[sea_orm(nullable)]
    pub location: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::decision_makers::Entity")]
    DecisionMakers,
}

impl Related<super::decision_makers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DecisionMakers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ColdInvestor {
    type Error = String;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(ColdInvestor {
            sectors: tags_from_json(m.id, "sectors", m.sectors)?,
            stages: tags_from_json(m.id, "stages", m.stages)?,
            id: m.id,
            name: m.name,
            website: m.website,
            location: m.location,
            created_at: m.created_at.with_timezone(&chrono::Utc),
        })
    }
}
