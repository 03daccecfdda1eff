//! PostgreSQL-backed `RoomRepository` implementation using Diesel ORM.
//!
//! Reads join `salas` to `predios` in one statement so each listing carries
//! the owning building's name.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RoomRepository, RoomRepositoryError};
use crate::domain::{Room, RoomCode, RoomDraft, RoomListing};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{SalaRow, SalaValues};
use super::pool::{DbPool, PoolError};
use super::schema::{predios, salas};

/// Diesel-backed implementation of the room persistence port.
#[derive(Clone)]
pub struct DieselRoomRepository {
    pool: DbPool,
}

impl DieselRoomRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> RoomRepositoryError {
    map_pool_error(error, RoomRepositoryError::connection)
}

fn diesel_error(
    operation: &'static str,
) -> impl FnOnce(diesel::result::Error) -> RoomRepositoryError {
    move |error| {
        map_diesel_error(
            error,
            operation,
            RoomRepositoryError::query,
            RoomRepositoryError::connection,
        )
    }
}

fn to_listing((row, building_name): (SalaRow, String)) -> RoomListing {
    RoomListing {
        room: Room::from(row),
        building_name,
    }
}

#[async_trait]
impl RoomRepository for DieselRoomRepository {
    async fn list_with_building(&self) -> Result<Vec<RoomListing>, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<(SalaRow, String)> = salas::table
            .inner_join(predios::table)
            .select((SalaRow::as_select(), predios::nome))
            .order_by(salas::numero.asc())
            .load(&mut conn)
            .await
            .map_err(diesel_error("list salas"))?;

        Ok(rows.into_iter().map(to_listing).collect())
    }

    async fn find_with_building(
        &self,
        code: RoomCode,
    ) -> Result<Option<RoomListing>, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<(SalaRow, String)> = salas::table
            .inner_join(predios::table)
            .filter(salas::codigo.eq(code.get()))
            .select((SalaRow::as_select(), predios::nome))
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error("find sala"))?;

        Ok(row.map(to_listing))
    }

    async fn create(&self, draft: &RoomDraft) -> Result<Room, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: SalaRow = diesel::insert_into(salas::table)
            .values(SalaValues::from(draft))
            .returning(SalaRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error("insert sala"))?;

        Ok(row.into())
    }

    async fn update(
        &self,
        code: RoomCode,
        draft: &RoomDraft,
    ) -> Result<Option<Room>, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<SalaRow> = diesel::update(salas::table.find(code.get()))
            .set(SalaValues::from(draft))
            .returning(SalaRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error("update sala"))?;

        Ok(row.map(Room::from))
    }

    async fn delete(&self, code: RoomCode) -> Result<usize, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::delete(salas::table.find(code.get()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error("delete sala"))
    }
}
