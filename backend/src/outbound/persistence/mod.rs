//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the building and room ports backed by
//! PostgreSQL via `diesel-async` and a shared `bb8` pool.
//!
//! - **Thin adapters**: each port method runs one statement and converts rows
//!   to domain types. No request logic lives here.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Driver text preserved**: failures keep the database's own message.
//!
//! # Example
//!
//! ```ignore
//! use salas_api::outbound::persistence::{DbPool, DieselBuildingRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/salas")).await?;
//! let buildings = DieselBuildingRepository::new(pool);
//! ```

mod diesel_building_repository;
mod diesel_error_mapping;
mod diesel_room_repository;
pub mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_building_repository::DieselBuildingRepository;
pub use diesel_room_repository::DieselRoomRepository;
pub use migrations::{MigrationError, run_pending_migrations, run_pending_migrations_async};
pub use pool::{DbPool, PoolConfig, PoolError};
