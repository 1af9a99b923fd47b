pub mod client;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod fixtures;
pub mod seed;
pub mod utils;

use sea_orm_migration::MigratorTrait;

pub use config::{Config, SeedVariant};
pub use error::{AppError, AppResult};
pub use seed::{SeedReport, Seeder};

use client::HttpParkingApi;
use db::SeaOrmStore;
use fixtures::SeedFixtures;
use seed::SeedOptions;

/// Wipe the database, reseed it and issue tickets against the parking API.
///
/// Opens one connection pool for the whole run and closes it on the way out,
/// whether seeding succeeded or not.
pub async fn run(config: &Config) -> AppResult<SeedReport> {
    let fixtures = SeedFixtures::load(config)?;
    let api = HttpParkingApi::new(&config.api_base_url, config.http_timeout())?;

    let db = db::connect(config).await?;
    tracing::info!("Connected to database");

    migration::Migrator::up(&db, None).await?;
    tracing::info!("Migrations complete");

    let store = SeaOrmStore::new(db.clone());
    let outcome = Seeder::new(&store, &api, fixtures, SeedOptions::from(config))
        .run()
        .await;

    if let Err(e) = db.close().await {
        tracing::warn!("Failed to close database connection: {}", e);
    }

    outcome
}
