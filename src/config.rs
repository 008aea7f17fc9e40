//! Service configuration loaded from environment variables.

use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Environment-supplied settings, read once at startup. Field names map to
/// `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `PORT`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_db_host")]
    pub db_host: String,

    #[serde(default = "default_db_port")]
    pub db_port: u16,

    #[serde(default = "default_db_user")]
    pub db_user: String,

    #[serde(default)]
    pub db_password: String,

    #[serde(default = "default_db_name")]
    pub db_name: String,

    /// HTTP listening port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_user() -> String {
    "postgres".to_string()
}

fn default_db_name() -> String {
    "todo".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Load configuration from the environment, reading `.env` first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Connection options for the configured database, sslmode disabled.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
            .ssl_mode(PgSslMode::Disable)
    }
}
