use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "decision_maker_unlocks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub decision_maker_id: Uuid,
    pub payment_id: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::decision_makers::Entity",
        from = "Column::DecisionMakerId",
        to = "super::decision_makers::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DecisionMakers,
}

impl Related<super::decision_makers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DecisionMakers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
