//! Startup settings loaded via OrthoConfig.

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use salas_api::outbound::persistence::PoolConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3002;
const PORT_ENV: &str = "PORT";
const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Settings that cannot be resolved into a runnable server.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("no database URL: set SALAS_API_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,
    #[error("PORT is not a valid port number: {value:?}")]
    InvalidPort { value: String },
}

/// Configuration values controlling the listener, the pool, and migrations.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SALAS_API")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Listening port. Falls back to `PORT`, then 3002.
    pub port: Option<u16>,
    /// PostgreSQL URL. Falls back to `DATABASE_URL`.
    pub database_url: Option<String>,
    pub pool_max_size: Option<u32>,
    pub pool_min_idle: Option<u32>,
    pub pool_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl ServerSettings {
    /// Return the configured host, falling back to every interface.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Resolve the listening port.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidPort`] when `PORT` is set but not a
    /// port number.
    pub fn port(&self) -> Result<u16, SettingsError> {
        if let Some(port) = self.port {
            return Ok(port);
        }
        match env::var(PORT_ENV) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| SettingsError::InvalidPort { value: raw }),
            Err(_) => Ok(DEFAULT_PORT),
        }
    }

    /// Resolve the database URL.
    ///
    /// # Errors
    /// Returns [`SettingsError::MissingDatabaseUrl`] when neither source is
    /// set.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        self.database_url
            .clone()
            .or_else(|| env::var(DATABASE_URL_ENV).ok())
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Build the pool configuration for `database_url`.
    pub fn pool_config(&self, database_url: String) -> PoolConfig {
        let mut config = PoolConfig::new(database_url);
        if let Some(max_size) = self.pool_max_size {
            config = config.with_max_size(max_size);
        }
        if let Some(min_idle) = self.pool_min_idle {
            config = config.with_min_idle(Some(min_idle));
        }
        if let Some(secs) = self.pool_timeout_secs {
            config = config.with_connection_timeout(Duration::from_secs(secs));
        }
        config
    }
}
