use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080 }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AdminConfig {
    /// Shared key checked by the admin middleware; env `ADMIN_API_KEY` wins.
    #[serde(default)]
    pub api_key: String,
}

fn default_max_connections() -> u32 { 5 }
fn default_min_connections() -> u32 { 1 }
fn default_acquire_timeout() -> u64 { 30 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` if present, otherwise start from defaults; then
    /// fill gaps from env vars and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default().unwrap_or_default();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.admin.normalize_from_env();
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        }
        if self.port == 0 {
            self.port = std::env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .ok_or_else(|| anyhow!("server.port must be in 1..=65535"))?;
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
        if self.url.trim().is_empty() {
            // rwc so a fresh deployment creates the file on first boot
            self.url = "sqlite://database.db?mode=rwc".to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.url.to_lowercase().starts_with("sqlite:") {
            return Err(anyhow!("database.url must be a sqlite:// URL"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database.acquire_timeout_secs must be a positive number of seconds"));
        }
        Ok(())
    }
}

impl AdminConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(key) = std::env::var("ADMIN_API_KEY") {
            if !key.trim().is_empty() {
                self.api_key = key;
            }
        }
        if self.api_key.trim().is_empty() {
            self.api_key = "dev-admin-key-change-me".to_string();
        }
    }
}
