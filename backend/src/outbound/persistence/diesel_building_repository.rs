//! PostgreSQL-backed `BuildingRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BuildingRepository, BuildingRepositoryError};
use crate::domain::{Building, BuildingCode, BuildingDraft};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{PredioRow, PredioValues};
use super::pool::{DbPool, PoolError};
use super::schema::predios;

/// Diesel-backed implementation of the building persistence port.
#[derive(Clone)]
pub struct DieselBuildingRepository {
    pool: DbPool,
}

impl DieselBuildingRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> BuildingRepositoryError {
    map_pool_error(error, BuildingRepositoryError::connection)
}

fn diesel_error(
    operation: &'static str,
) -> impl FnOnce(diesel::result::Error) -> BuildingRepositoryError {
    move |error| {
        map_diesel_error(
            error,
            operation,
            BuildingRepositoryError::query,
            BuildingRepositoryError::connection,
        )
    }
}

#[async_trait]
impl BuildingRepository for DieselBuildingRepository {
    async fn list(&self) -> Result<Vec<Building>, BuildingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<PredioRow> = predios::table
            .select(PredioRow::as_select())
            .order_by(predios::codigo.asc())
            .load(&mut conn)
            .await
            .map_err(diesel_error("list predios"))?;

        Ok(rows.into_iter().map(Building::from).collect())
    }

    async fn find_by_code(
        &self,
        code: BuildingCode,
    ) -> Result<Option<Building>, BuildingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<PredioRow> = predios::table
            .filter(predios::codigo.eq(code.get()))
            .select(PredioRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error("find predio"))?;

        Ok(row.map(Building::from))
    }

    async fn create(&self, draft: &BuildingDraft) -> Result<Building, BuildingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: PredioRow = diesel::insert_into(predios::table)
            .values(PredioValues::from(draft))
            .returning(PredioRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error("insert predio"))?;

        Ok(row.into())
    }

    async fn update(
        &self,
        code: BuildingCode,
        draft: &BuildingDraft,
    ) -> Result<Option<Building>, BuildingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<PredioRow> = diesel::update(predios::table.find(code.get()))
            .set(PredioValues::from(draft))
            .returning(PredioRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error("update predio"))?;

        Ok(row.map(Building::from))
    }

    async fn delete(&self, code: BuildingCode) -> Result<usize, BuildingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::delete(predios::table.find(code.get()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error("delete predio"))
    }
}
