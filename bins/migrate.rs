//! Offline migration runner. Expects no concurrent traffic against the same
//! database file.
//!
//! Usage: migrate [up|additive|rebuild]
//!   up        baseline migrations (create tables if absent; default)
//!   additive  add current-model columns missing from existing tables
//!   rebuild   rename tables aside, recreate, copy rows, drop the old ones

use migration::MigratorTrait;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_default();

    let strategy = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());
    let db = models::db::connect().await?;

    match strategy.as_str() {
        "up" => {
            migration::Migrator::up(&db, None).await?;
            info!("baseline migrations applied");
        }
        "additive" => {
            migration::additive::run(&db).await?;
            info!("additive migration finished");
        }
        "rebuild" => {
            migration::rebuild::run(&db).await?;
            info!("rename-and-rebuild migration finished");
        }
        other => {
            anyhow::bail!("unknown strategy '{other}' (expected up, additive, or rebuild)");
        }
    }
    Ok(())
}
