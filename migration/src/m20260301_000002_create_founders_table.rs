use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Founders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Founders::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Founders::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Founders::CompanyName)
                            .string_len(150)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Founders::ProjectName)
                            .string_len(150)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Founders::Tagline)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Founders::Pitch).text().not_null().default(""))
                    .col(ColumnDef::new(Founders::Website).text())
                    .col(ColumnDef::new(Founders::Sector).string_len(64))
                    .col(ColumnDef::new(Founders::Stage).string_len(64))
                    .col(
                        ColumnDef::new(Founders::IsVisible)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Founders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Founders::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_founders_user_id")
                            .from(Founders::Table, Founders::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Scout board reads visible founders only
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_founders_visible_created
                ON founders (created_at DESC)
                WHERE is_visible = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_founders_updated_at
                BEFORE UPDATE ON founders
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_founders_updated_at ON founders;
                DROP INDEX IF EXISTS idx_founders_visible_created;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Founders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Founders {
    Table,
    Id,
    UserId,
    CompanyName,
    ProjectName,
    Tagline,
    Pitch,
    Website,
    Sector,
    Stage,
    IsVisible,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
