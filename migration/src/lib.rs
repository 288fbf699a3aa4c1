pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_founders_table;
mod m20260301_000003_create_vcs_table;
mod m20260301_000004_create_cold_investor_tables;
mod m20260301_000005_create_payments_table;
mod m20260301_000006_create_engagement_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_founders_table::Migration),
            Box::new(m20260301_000003_create_vcs_table::Migration),
            Box::new(m20260301_000004_create_cold_investor_tables::Migration),
            Box::new(m20260301_000005_create_payments_table::Migration),
            Box::new(m20260301_000006_create_engagement_tables::Migration),
        ]
    }
}
