pub use sea_orm_migration::prelude::*;

mod m20231101_000001_create_users;
mod m20231101_000002_create_vehicles;
mod m20231101_000003_create_tickets;
mod m20231205_000001_add_user_credentials;

/// Name of the table sea-orm-migration keeps its ledger in.
pub const MIGRATION_TABLE: &str = "seaql_migrations";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231101_000001_create_users::Migration),
            Box::new(m20231101_000002_create_vehicles::Migration),
            Box::new(m20231101_000003_create_tickets::Migration),
            Box::new(m20231205_000001_add_user_credentials::Migration),
        ]
    }
}
