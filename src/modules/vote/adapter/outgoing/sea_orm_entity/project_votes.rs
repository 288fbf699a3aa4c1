use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "project_votes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub founder_id: Uuid,
    pub email: String,
    pub vote_date: Date,
    pub created_at: DateTimeWithTimeZone,
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

impl Related<crate::modules::founder::adapter::outgoing::sea_orm_entity::founders::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Founders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
