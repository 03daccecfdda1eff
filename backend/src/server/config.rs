//! HTTP server configuration object.

use salas_api::outbound::persistence::DbPool;

/// Everything `create_server` needs: where to listen and the pool backing
/// the repositories.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, db_pool: DbPool) -> Self {
        Self {
            host: host.into(),
            port,
            db_pool,
        }
    }
}
