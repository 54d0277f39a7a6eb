use std::env;
use std::time::Duration;

use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://database.db?mode=rwc".to_string())
});

/// Connect using `config.toml` when available, env vars otherwise.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    match configs::load_default() {
        Ok(mut cfg) => {
            cfg.database.normalize_from_env();
            connect_with_config(&cfg.database).await
        }
        Err(_) => {
            let db = Database::connect(DATABASE_URL.as_str()).await?;
            Ok(db)
        }
    }
}

pub async fn connect_with_config(
    cfg: &configs::DatabaseConfig,
) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    Ok(db)
}
