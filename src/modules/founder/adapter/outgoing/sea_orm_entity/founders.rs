use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::founder::application::domain::entities::FounderProfile;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "founders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub company_name: String,
    pub project_name: String,
    pub tagline: String,
    #[sea_orm(column_type = "Text")]
    pub pitch: String,
    #[sea_orm(nullable)]
    pub website: Option<String>,
    #[sea_orm(nullable)]
    pub sector: Option<String>,
    #[sea_orm(nullable)]
    pub stage: Option<String>,
    pub is_visible: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl From<Model> for FounderProfile {
    fn from(m: Model) -> Self {
        FounderProfile {
            id: m.id,
            user_id: m.user_id,
            company_name: m.company_name,
            project_name: m.project_name,
            tagline: m.tagline,
            pitch: m.pitch,
            website: m.website,
            sector: m.sector,
            stage: m.stage,
            is_visible: m.is_visible,
            created_at: m.created_at.with_timezone(&chrono::Utc),
            updated_at: m.updated_at.with_timezone(&chrono::Utc),
        }
    }
}
