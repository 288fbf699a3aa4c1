use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vcs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vcs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Vcs::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Vcs::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Vcs::FundName).string_len(150).not_null())
                    .col(ColumnDef::new(Vcs::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Vcs::Bio).text().not_null())
                    .col(
                        ColumnDef::new(Vcs::Sectors)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Vcs::Stages)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Vcs::CheckSize).string_len(64))
                    .col(ColumnDef::new(Vcs::Location).string_len(100))
                    .col(ColumnDef::new(Vcs::Website).text())
                    .col(ColumnDef::new(Vcs::Price).integer().not_null())
                    .col(ColumnDef::new(Vcs::IntroPrice).integer())
                    .col(ColumnDef::new(Vcs::ContactMethod).string_len(16).not_null())
                    .col(ColumnDef::new(Vcs::ContactValue).text().not_null())
                    .col(ColumnDef::new(Vcs::LinkedinUrl).text())
                    .col(
                        ColumnDef::new(Vcs::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Vcs::PendingChanges).json_binary())
                    .col(
                        ColumnDef::new(Vcs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Vcs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::cust("price > 0"))
                    .check(Expr::cust("intro_price IS NULL OR intro_price > 0"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vcs_user_id")
                            .from(Vcs::Table, Vcs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Public listing filters on verification and sorts by newest
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_vcs_verified_created
                ON vcs (is_verified, created_at DESC);
                "#,
            )
            .await?;

        // Containment lookups such as sectors @> '["fintech"]'
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_vcs_sectors
                ON vcs USING GIN (sectors);
                CREATE INDEX IF NOT EXISTS idx_vcs_stages
                ON vcs USING GIN (stages);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_vcs_updated_at
                BEFORE UPDATE ON vcs
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
                DROP TRIGGER IF EXISTS update_vcs_updated_at ON vcs;
                DROP INDEX IF EXISTS idx_vcs_verified_created;
                DROP INDEX IF EXISTS idx_vcs_sectors;
                DROP INDEX IF EXISTS idx_vcs_stages;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Vcs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Vcs {
    Table,
    Id,
    UserId,
    Name,
    FundName,
    Title,
    Bio,
    Sectors,
    Stages,
    CheckSize,
    Location,
    Website,
    Price,
    IntroPrice,
    ContactMethod,
    ContactValue,
    LinkedinUrl,
    IsVerified,
    PendingChanges,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
