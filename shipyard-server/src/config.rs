//! Server configuration loaded from the environment.

use std::str::FromStr;

/// Where ships are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// PostgreSQL via `DATABASE_URL`.
    Postgres,
    /// Process-local map, lost on restart.
    Memory,
}

impl FromStr for StorageMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("postgres") {
            Ok(Self::Postgres)
        } else if value.eq_ignore_ascii_case("memory") {
            Ok(Self::Memory)
        } else {
            Err(format!(
                "SHIPYARD_STORAGE must be `postgres` or `memory`, got `{value}`"
            ))
        }
    }
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Origins allowed by CORS.
    pub ui_origins: Vec<String>,
    /// Storage backend.
    pub storage: StorageMode,
    /// PostgreSQL connection string, required for [`StorageMode::Postgres`].
    pub database_url: Option<String>,
}

impl ServerConfig {
    /// Build the configuration from process environment variables.
    #[cfg_attr(test, allow(dead_code))]
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SHIPYARD_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("SHIPYARD_PORT") {
            Some(raw) => u16::from_str(raw.trim())
                .map_err(|_| format!("SHIPYARD_PORT must be a u16 number, got `{raw}`"))?,
            None => 8080,
        };
        let ui_origins = lookup("SHIPYARD_UI_ORIGINS")
            .unwrap_or_else(|| "http://127.0.0.1:4200,http://localhost:4200".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();
        let storage = match lookup("SHIPYARD_STORAGE") {
            Some(raw) => raw.trim().parse()?,
            None => StorageMode::Postgres,
        };
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if storage == StorageMode::Postgres && database_url.is_none() {
            return Err("DATABASE_URL must be set to a PostgreSQL connection string".to_string());
        }
        Ok(Self {
            host,
            port,
            ui_origins,
            storage,
            database_url,
        })
    }
}
