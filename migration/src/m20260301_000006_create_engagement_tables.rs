use sea_orm_migration::prelude::*;

/// Scout votes, email-gate submissions and the VC request log.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectVotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectVotes::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(ProjectVotes::FounderId).uuid().not_null())
                    .col(ColumnDef::new(ProjectVotes::Email).string_len(255).not_null())
                    .col(ColumnDef::new(ProjectVotes::VoteDate).date().not_null())
                    .col(
                        ColumnDef::new(ProjectVotes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_votes_founder_id")
                            .from(ProjectVotes::Table, ProjectVotes::FounderId)
                            .to(Founders::Table, Founders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmailSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmailSubmissions::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(EmailSubmissions::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmailSubmissions::Source)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmailSubmissions::CreatedAt)
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
                    .table(VcRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VcRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(VcRequests::FounderId).uuid().not_null())
                    .col(ColumnDef::new(VcRequests::VcId).uuid().not_null())
                    .col(ColumnDef::new(VcRequests::Kind).string_len(32).not_null())
                    .col(
                        ColumnDef::new(VcRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::cust("kind IN ('unlock', 'intro_request')"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vc_requests_founder_id")
                            .from(VcRequests::Table, VcRequests::FounderId)
                            .to(Founders::Table, Founders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vc_requests_vc_id")
                            .from(VcRequests::Table, VcRequests::VcId)
                            .to(Vcs::Table, Vcs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One vote per project and email; the cooldown check scans by email
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_project_votes_founder_email
                ON project_votes (founder_id, email);
                CREATE INDEX IF NOT EXISTS idx_project_votes_email_created
                ON project_votes (email, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_email_submissions_email_source
                ON email_submissions (email, source);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_vc_requests_vc_id
                ON vc_requests (vc_id, kind);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VcRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmailSubmissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectVotes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectVotes {
    Table,
    Id,
    FounderId,
    Email,
    VoteDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EmailSubmissions {
    Table,
    Id,
    Email,
    Source,
    CreatedAt,
}

#[derive(DeriveIden)]
enum VcRequests {
    Table,
    Id,
    FounderId,
    VcId,
    Kind,
    CreatedAt,
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
