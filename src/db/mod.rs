use async_trait::async_trait;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, EntityTrait,
    Statement, TransactionTrait,
};

use crate::config::Config;
use crate::entities::{ticket, user, vehicle};
use crate::error::AppResult;

pub async fn connect(config: &Config) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.connection_url());
    options.sqlx_logging(false);

    Ok(Database::connect(options).await?)
}

/// What a reset removed and wrote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetSummary {
    /// Collection name and number of documents deleted from it.
    pub cleared: Vec<(String, u64)>,
    pub users: u64,
    pub vehicles: u64,
}

/// Write side of the seeding run.
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Empty every collection, then write users and vehicles. All or nothing.
    async fn reset(
        &self,
        users: &[user::Model],
        vehicles: &[vehicle::Model],
    ) -> AppResult<ResetSummary>;

    async fn insert_tickets(&self, tickets: &[ticket::Model]) -> AppResult<u64>;
}

pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SeedStore for SeaOrmStore {
    async fn reset(
        &self,
        users: &[user::Model],
        vehicles: &[vehicle::Model],
    ) -> AppResult<ResetSummary> {
        let txn = self.db.begin().await?;

        let mut cleared = Vec::new();
        for name in collection_names(&txn).await? {
            let deleted = clear_collection(&txn, &name).await?;
            tracing::debug!(collection = %name, deleted, "Cleared collection");
            cleared.push((name, deleted));
        }

        let users = insert_users(&txn, users).await?;
        let vehicles = insert_vehicles(&txn, vehicles).await?;

        txn.commit().await?;

        Ok(ResetSummary {
            cleared,
            users,
            vehicles,
        })
    }

    async fn insert_tickets(&self, tickets: &[ticket::Model]) -> AppResult<u64> {
        if tickets.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await?;
        let models = tickets.iter().cloned().map(ticket::ActiveModel::from);
        let inserted = ticket::Entity::insert_many(models)
            .exec_without_returning(&txn)
            .await?;
        txn.commit().await?;

        Ok(inserted)
    }
}

/// Every user table in the current database or schema, minus the migration ledger.
pub async fn collection_names<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<String>> {
    let backend = conn.get_database_backend();
    let sql = match backend {
        DatabaseBackend::Postgres => {
            "SELECT tablename::text AS name FROM pg_catalog.pg_tables \
             WHERE schemaname = current_schema() ORDER BY tablename"
        }
        DatabaseBackend::MySql => {
            "SELECT table_name AS name FROM information_schema.tables \
             WHERE table_schema = DATABASE() AND table_type = 'BASE TABLE' ORDER BY table_name"
        }
        DatabaseBackend::Sqlite => {
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name"
        }
    };

    let rows = conn.query_all(Statement::from_string(backend, sql)).await?;

    let mut names = Vec::with_capacity(rows.len());
    for row in rows {
        let name: String = row.try_get("", "name")?;
        if name != migration::MIGRATION_TABLE {
            names.push(name);
        }
    }
    Ok(names)
}

/// Delete every row of `name`, returning how many went.
pub async fn clear_collection<C: ConnectionTrait>(conn: &C, name: &str) -> AppResult<u64> {
    let backend = conn.get_database_backend();
    let sql = format!("DELETE FROM {}", quote_ident(backend, name));

    let result = conn.execute(Statement::from_string(backend, sql)).await?;
    Ok(result.rows_affected())
}

fn quote_ident(backend: DatabaseBackend, name: &str) -> String {
    match backend {
        DatabaseBackend::MySql => format!("`{}`", name.replace('`', "``")),
        DatabaseBackend::Postgres | DatabaseBackend::Sqlite => {
            format!("\"{}\"", name.replace('"', "\"\""))
        }
    }
}

async fn insert_users<C: ConnectionTrait>(conn: &C, users: &[user::Model]) -> AppResult<u64> {
    if users.is_empty() {
        return Ok(0);
    }

    Ok(user::Entity::insert_many(users.iter().cloned().map(user::ActiveModel::from))
        .exec_without_returning(conn)
        .await?)
}

async fn insert_vehicles<C: ConnectionTrait>(
    conn: &C,
    vehicles: &[vehicle::Model],
) -> AppResult<u64> {
    if vehicles.is_empty() {
        return Ok(0);
    }

    Ok(vehicle::Entity::insert_many(vehicles.iter().cloned().map(vehicle::ActiveModel::from))
        .exec_without_returning(conn)
        .await?)
}
