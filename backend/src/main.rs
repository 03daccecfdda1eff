//! Service entry-point: loads settings, prepares the database, and serves
//! the predios and salas endpoints.

mod server;

use std::env;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use salas_api::outbound::persistence::{DbPool, run_pending_migrations_async};
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let database_url = settings.database_url().map_err(std::io::Error::other)?;
    let port = settings.port().map_err(std::io::Error::other)?;

    if settings.run_migrations {
        let applied = run_pending_migrations_async(database_url.clone())
            .await
            .map_err(std::io::Error::other)?;
        info!(applied, "database migrations applied");
    }

    let pool = DbPool::new(settings.pool_config(database_url))
        .await
        .map_err(std::io::Error::other)?;

    create_server(ServerConfig::new(settings.host(), port, pool))?.await
}
