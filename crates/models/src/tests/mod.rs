mod crud_tests;

use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// In-memory SQLite with a single pooled connection (a second pooled
/// connection would be a different empty database).
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
