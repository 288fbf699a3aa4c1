use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ColdInvestors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ColdInvestors::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(ColdInvestors::Name).string_len(150).not_null())
                    .col(ColumnDef::new(ColdInvestors::Website).text())
                    .col(
                        ColumnDef::new(ColdInvestors::Sectors)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(ColdInvestors::Stages)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(ColdInvestors::Location).string_len(100))
                    .col(
                        ColumnDef::new(ColdInvestors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DecisionMakers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DecisionMakers::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(DecisionMakers::ColdInvestorId).uuid().not_null())
                    .col(ColumnDef::new(DecisionMakers::Name).string_len(100).not_null())
                    .col(ColumnDef::new(DecisionMakers::Title).string_len(100).not_null())
                    .col(ColumnDef::new(DecisionMakers::Email).string_len(255))
                    .col(ColumnDef::new(DecisionMakers::LinkedinUrl).text())
                    .col(
                        ColumnDef::new(DecisionMakers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_decision_makers_cold_investor_id")
                            .from(DecisionMakers::Table, DecisionMakers::ColdInvestorId)
                            .to(ColdInvestors::Table, ColdInvestors::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DecisionMakerUnlocks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DecisionMakerUnlocks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(DecisionMakerUnlocks::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DecisionMakerUnlocks::DecisionMakerId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DecisionMakerUnlocks::PaymentId)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DecisionMakerUnlocks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_decision_maker_unlocks_decision_maker_id")
                            .from(
                                DecisionMakerUnlocks::Table,
                                DecisionMakerUnlocks::DecisionMakerId,
                            )
                            .to(DecisionMakers::Table, DecisionMakers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_decision_makers_cold_investor_id
                ON decision_makers (cold_investor_id);
                "#,
            )
            .await?;

        // One unlock per viewer email and decision maker
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_decision_maker_unlocks_email_dm
                ON decision_maker_unlocks (email, decision_maker_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DecisionMakerUnlocks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DecisionMakers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ColdInvestors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ColdInvestors {
    Table,
    Id,
    Name,
    Website,
    Sectors,
    Stages,
    Location,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DecisionMakers {
    Table,
    Id,
    ColdInvestorId,
    Name,
    Title,
    Email,
    LinkedinUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DecisionMakerUnlocks {
    Table,
    Id,
    Email,
    DecisionMakerId,
    PaymentId,
    CreatedAt,
}
