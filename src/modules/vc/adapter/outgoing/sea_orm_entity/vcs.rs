use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::{
    ContactMethod, VcCard, VcChanges, VcContact, VcListing,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vcs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub name: String,
    pub fund_name: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub sectors: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub stages: Json,
    #[sea_orm(nullable)]
    pub check_size: Option<String>,
    #[sea_orm(nullable)]
    pub location: Option<String>,
    #[sea_orm(nullable)]
    pub website: Option<String>,
    pub price: i32,
    #[sea_orm(nullable)]
    pub intro_price: Option<i32>,
    pub contact_method: String,
    pub contact_value: String,
    #[sea_orm(nullable)]
    pub linkedin_url: Option<String>,
    pub is_verified: bool,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub pending_changes: Option<Json>,
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

pub fn tags_from_json(id: Uuid, field: &str, value: Json) -> Result<Vec<String>, String> {
    serde_json::from_value(value).map_err(|e| format!("record {} {}: {}", id, field, e))
}

impl TryFrom<Model> for VcListing {
    type Error = String;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let contact_method = m
            .contact_method
            .parse::<ContactMethod>()
            .map_err(|e| format!("vc {}: {}", m.id, e))?;
        let sectors = tags_from_json(m.id, "sectors", m.sectors)?;
        let stages = tags_from_json(m.id, "stages", m.stages)?;
        let pending_changes = m
            .pending_changes
            .map(serde_json::from_value::<VcChanges>)
            .transpose()
            .map_err(|e| format!("vc {} pending_changes: {}", m.id, e))?;

        Ok(VcListing {
            card: VcCard {
                id: m.id,
                name: m.name,
                fund_name: m.fund_name,
                title: m.title,
                bio: m.bio,
                sectors,
                stages,
                check_size: m.check_size,
                location: m.location,
                website: m.website,
                price: m.price,
                intro_price: m.intro_price,
                contact_method,
                is_verified: m.is_verified,
                created_at: m.created_at.with_timezone(&chrono::Utc),
            },
            user_id: m.user_id,
            contact: VcContact {
                contact_method,
                contact_value: m.contact_value,
                linkedin_url: m.linkedin_url,
            },
            pending_changes,
            updated_at: m.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
