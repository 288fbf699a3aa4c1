use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Primary key is the processor's intent id
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .string_len(255)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::FounderId).uuid().not_null())
                    .col(ColumnDef::new(Payments::VcId).uuid())
                    .col(ColumnDef::new(Payments::DecisionMakerId).uuid())
                    .col(ColumnDef::new(Payments::Kind).string_len(32).not_null())
                    .col(ColumnDef::new(Payments::Amount).integer().not_null())
                    .col(ColumnDef::new(Payments::Currency).string_len(8).not_null())
                    .col(
                        ColumnDef::new(Payments::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Payments::IntroTemplate).text())
                    .col(
                        ColumnDef::new(Payments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Payments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::cust(
                        "kind IN ('vc_unlock', 'intro_request', 'project_visibility', 'decision_maker_unlock')",
                    ))
                    .check(Expr::cust("status IN ('pending', 'completed', 'failed')"))
                    .check(Expr::cust("amount > 0"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_founder_id")
                            .from(Payments::Table, Payments::FounderId)
                            .to(Founders::Table, Founders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_vc_id")
                            .from(Payments::Table, Payments::VcId)
                            .to(Vcs::Table, Vcs::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_decision_maker_id")
                            .from(Payments::Table, Payments::DecisionMakerId)
                            .to(DecisionMakers::Table, DecisionMakers::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Payment history and unlock lookups by founder
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_payments_founder_created
                ON payments (founder_id, created_at DESC);
                CREATE INDEX IF NOT EXISTS idx_payments_unlocks
                ON payments (founder_id, vc_id)
                WHERE kind = 'vc_unlock' AND status = 'completed';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_payments_updated_at
                BEFORE UPDATE ON payments
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
                DROP TRIGGER IF EXISTS update_payments_updated_at ON payments;
                DROP INDEX IF EXISTS idx_payments_founder_created;
                DROP INDEX IF EXISTS idx_payments_unlocks;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    FounderId,
    VcId,
    DecisionMakerId,
    Kind,
    Amount,
    Currency,
    Status,
    IntroTemplate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Founders {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Vcs {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum DecisionMakers {
    Table,
    Id,
}
