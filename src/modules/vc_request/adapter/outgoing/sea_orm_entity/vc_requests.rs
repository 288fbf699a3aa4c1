use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vc_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub founder_id: Uuid,
    pub vc_id: Uuid,
    pub kind: String,
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
    #[sea_orm(
        belongs_to = "crate::modules::vc::adapter::outgoing::sea_orm_entity::vcs::Entity",
        from = "Column::VcId",
        to = "crate::modules::vc::adapter::outgoing::sea_orm_entity::vcs::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Vcs,
}

impl ActiveModelBehavior for ActiveModel {}
