//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::{BuildingRepository, RoomRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub buildings: Arc<dyn BuildingRepository>,
    pub rooms: Arc<dyn RoomRepository>,
}

impl HttpState {
    /// Construct state from the two repository ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use salas_api::inbound::http::state::HttpState;
    /// use salas_api::outbound::persistence::{
    ///     DbPool, DieselBuildingRepository, DieselRoomRepository, PoolConfig,
    /// };
    ///
    /// # async fn build() -> Result<HttpState, salas_api::outbound::persistence::PoolError> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/salas")).await?;
    /// let state = HttpState::new(
    ///     Arc::new(DieselBuildingRepository::new(pool.clone())),
    ///     Arc::new(DieselRoomRepository::new(pool)),
    /// );
    /// # Ok(state)
    /// # }
    /// ```
    pub fn new(buildings: Arc<dyn BuildingRepository>, rooms: Arc<dyn RoomRepository>) -> Self {
        Self { buildings, rooms }
    }
}
